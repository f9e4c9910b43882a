/// Result of an idempotent "add to collection" operation. `AlreadyExists`
/// is a success, not an error; handlers map it to 200 instead of 201.
pub enum ToggleOutcome<T> {
    Created(T),
    AlreadyExists,
}

pub mod favorite;
pub mod ingredient;
pub mod recipe;
pub mod shopping_cart;
pub mod shopping_list;
pub mod subscription;
pub mod tag;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;
