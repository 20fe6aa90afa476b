//! Fold over a sequence into an accumulator that can only grow.
//!
//! Every aggregate in the crate (credit totals, bulk insert payloads) goes
//! through [`accumulate`]. The per-item closure maps an item to its
//! contribution and never sees the accumulator, so a step cannot replace the
//! running value; it can only hand something to [`Accumulator::combine`].

/// A running value built by repeated combination.
///
/// `Default` is the identity: the value returned for an empty sequence.
pub trait Accumulator: Default {
    /// What a single item adds.
    type Contribution;
    /// What the caller gets once the traversal ends.
    type Output;

    /// Extend the running value. Implementations add or append, never assign.
    fn combine(&mut self, contribution: Self::Contribution);

    fn finish(self) -> Self::Output;
}

/// One full traversal of `items`, starting from `A::default()`.
pub fn accumulate<A, I, F>(items: I, mut contribution_of: F) -> A::Output
where
    A: Accumulator,
    I: IntoIterator,
    F: FnMut(I::Item) -> A::Contribution,
{
    let mut accumulator = A::default();
    for item in items {
        accumulator.combine(contribution_of(item));
    }
    accumulator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Joined(Vec<String>);

    impl Accumulator for Joined {
        type Contribution = String;
        type Output = String;

        fn combine(&mut self, contribution: String) {
            self.0.push(contribution);
        }

        fn finish(self) -> String {
            self.0.join("|")
        }
    }

    #[test]
    fn empty_sequence_yields_identity() {
        let out = accumulate::<Joined, _, _>(Vec::<&str>::new(), |s| s.to_string());
        assert_eq!(out, "");
    }

    #[test]
    fn every_item_survives_the_traversal() {
        let out = accumulate::<Joined, _, _>(["a", "b", "c"], |s| s.to_uppercase());
        assert_eq!(out, "A|B|C");
    }
}
