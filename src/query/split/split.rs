/// The result of a binary cut.
#[derive(Clone, Debug, PartialEq)]
pub enum SplitResult<T> {
    /// The cut yielded two results: the first one lies on the left of the cutter (or, for a line
    /// cut at a point, before the cut) and the second one lies on its right (after the cut).
    Pair(T, T),
    /// The cut had no effect: the whole shape lies on the left side.
    Left,
    /// The cut had no effect: the whole shape lies on the right side.
    Right,
}

impl<T> SplitResult<T> {
    /// Returns the two pieces if this is a [`SplitResult::Pair`].
    pub fn into_pair(self) -> Option<(T, T)> {
        match self {
            Self::Pair(left, right) => Some((left, right)),
            Self::Left | Self::Right => None,
        }
    }
}
