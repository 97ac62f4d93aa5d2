/**
 * API Route Configuration
 *
 * One canonical route set (the source history carried duplicate and
 * conflicting definitions; this consolidates them).
 *
 * # Routes
 *
 * ## Auth
 * - `POST /api/register` - public
 * - `POST /api/login` - public
 * - `POST /api/logout` - authenticated
 *
 * ## Books
 * - `GET /api/books` - public
 * - `POST /api/books` - authenticated
 * - `DELETE /api/books/{book_id}` - authenticated, owner only
 *
 * ## Shelves
 * - `GET /api/shelves`, `GET /api/shelves/public` - public listings
 * - `POST /api/shelves`, `GET /api/shelves/my`, `GET /api/shelves/member`,
 *   `GET /api/shelves/{shelf_id}` - authenticated
 * - members: `POST/GET /api/shelves/{shelf_id}/members`,
 *   `DELETE /api/shelves/{shelf_id}/members/{member_id}`
 * - books: `POST/GET /api/shelves/{shelf_id}/books`,
 *   `DELETE /api/shelves/{shelf_id}/books/{book_id}`
 *
 * ## User self-service
 * - `GET/PATCH /api/user/profile`, `GET /api/user/books`,
 *   `GET /api/user/shelves`
 *
 * ## Import
 * - `GET /api/bookslitres?url=` - preview, public
 * - `POST /api/bookslitres/save?url=` - authenticated
 *
 * Authentication is enforced per handler through the `CurrentUser`
 * extractor, which resolves and validates the session token.
 */

use axum::routing::{delete, get, post};
use axum::Router;

use crate::auth::handlers::{login, logout, register};
use crate::books::handlers::{create_book, delete_book, list_books};
use crate::litres::handlers::{preview_import, save_import};
use crate::server::state::AppState;
use crate::shelves::handlers::{
    add_book_to_shelf, add_member, create_shelf, get_shelf, list_members, list_public_shelves,
    list_shelf_books, member_shelves, my_shelves, remove_book_from_shelf, remove_member,
};
use crate::users::handlers::{get_profile, update_profile, user_books, user_shelves};

/// Add all API routes to the router
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Auth
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        // Books
        .route("/api/books", get(list_books).post(create_book))
        .route("/api/books/{book_id}", delete(delete_book))
        // Shelves
        .route("/api/shelves", get(list_public_shelves).post(create_shelf))
        .route("/api/shelves/public", get(list_public_shelves))
        .route("/api/shelves/my", get(my_shelves))
        .route("/api/shelves/member", get(member_shelves))
        .route("/api/shelves/{shelf_id}", get(get_shelf))
        .route(
            "/api/shelves/{shelf_id}/members",
            post(add_member).get(list_members),
        )
        .route(
            "/api/shelves/{shelf_id}/members/{member_id}",
            delete(remove_member),
        )
        .route(
            "/api/shelves/{shelf_id}/books",
            post(add_book_to_shelf).get(list_shelf_books),
        )
        .route(
            "/api/shelves/{shelf_id}/books/{book_id}",
            delete(remove_book_from_shelf),
        )
        // User self-service
        .route("/api/user/profile", get(get_profile).patch(update_profile))
        .route("/api/user/books", get(user_books))
        .route("/api/user/shelves", get(user_shelves))
        // Litres import
        .route("/api/bookslitres", get(preview_import))
        .route("/api/bookslitres/save", post(save_import))
}
