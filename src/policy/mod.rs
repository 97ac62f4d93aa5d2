//! Ownership & Visibility Policy
//!
//! Pure decision functions with no side effects. Handlers look up the
//! referenced resources first (missing resources are `NotFound`, which
//! takes precedence over `Forbidden`) and then evaluate the relevant
//! predicate, failing with `Forbidden` when it returns false.

use crate::books::db::Book;
use crate::middleware::auth::CurrentUser;
use crate::shelves::db::Shelf;

/// A shelf is readable when public or owned by the caller
pub fn can_read_shelf(user: &CurrentUser, shelf: &Shelf) -> bool {
    shelf.public || shelf.owner_id == user.id
}

/// Only the owner may mutate a shelf or its memberships
pub fn can_write_shelf(user: &CurrentUser, shelf: &Shelf) -> bool {
    shelf.owner_id == user.id
}

/// Linking requires owning both the shelf and the book
pub fn can_link_book_to_shelf(user: &CurrentUser, shelf: &Shelf, book: &Book) -> bool {
    can_write_shelf(user, shelf) && book.user_id == user.id
}

/// The global book listing is open to everyone
pub fn can_read_book(_book: &Book) -> bool {
    true
}

/// Only the owner may delete a book
pub fn can_delete_book(user: &CurrentUser, book: &Book) -> bool {
    book.user_id == user.id
}
