//! Shelf HTTP Handlers
//!
//! Split by resource:
//!
//! - **`shelves`** - shelf CRUD and listings
//! - **`members`** - membership management
//! - **`books`** - shelf-book links

/// Shelf CRUD and listings
pub mod shelves;

/// Membership management
pub mod members;

/// Shelf-book links
pub mod books;

// Re-export handlers for route configuration
pub use books::{add_book_to_shelf, list_shelf_books, remove_book_from_shelf};
pub use members::{add_member, list_members, remove_member};
pub use shelves::{create_shelf, get_shelf, list_public_shelves, member_shelves, my_shelves};
