/// Removes the elements equal to an earlier element, keeping the first occurrences in order.
///
/// Equality is the exact `PartialEq` of the elements. Quadratic in the number of items.
pub fn dedup_unordered<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(items.len());

    for item in items {
        if !result.contains(&item) {
            result.push(item);
        }
    }

    result
}
