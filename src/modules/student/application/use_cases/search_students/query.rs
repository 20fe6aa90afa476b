use crate::shared::application::PaginationParams;

/// Case-insensitive name search; an empty fragment lists everyone
#[derive(Debug, Clone, Default)]
pub struct SearchStudentsQuery {
    pub name_fragment: String,
    pub pagination: PaginationParams,
}

impl SearchStudentsQuery {
    pub fn new(name_fragment: impl Into<String>, pagination: PaginationParams) -> Self {
        Self {
            name_fragment: name_fragment.into(),
            pagination,
        }
    }
}
