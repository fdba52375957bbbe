/// Ordering applied to the projected display list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Most recently added first
    Newest,
    /// Title ascending, case-insensitive
    TitleAsc,
    /// Highest rating first
    RatingDesc,
}
