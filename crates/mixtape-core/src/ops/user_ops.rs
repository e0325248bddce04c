use super::store::Store;
use crate::errors::{MixtapeError, Result};
use crate::model::{EntityKind, User};
use crate::rules::validate_identifier;

/// Add a User to the store
///
/// # Errors
/// * `InvalidIdentifier` - If the user ID is not a decimal u32
/// * `DuplicateIdentifier` - If a user with this ID already exists
///
/// The store is unchanged on error.
pub fn add_user(store: &mut Store, user: User) -> Result<()> {
    validate_identifier(EntityKind::User, &user.id)?;

    if store.contains_user(&user.id) {
        return Err(MixtapeError::DuplicateIdentifier {
            entity: EntityKind::User,
            id: user.id,
        });
    }

    store.insert_user(user);
    Ok(())
}
