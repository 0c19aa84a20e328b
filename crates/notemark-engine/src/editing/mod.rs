/*!
 * # Cursor-Aware Editing
 *
 * Text surgery used by a paragraph editor on every keystroke. All helpers are
 * pure: they take the paragraph and caret by value and hand back a new
 * [`Edit`]. Nothing here mutates shared state.
 *
 * ## Module Structure
 *
 * - **`edit`**: `Edit { text, cursor }` result type
 * - **`brackets`**: completes a typed `@` into `@[]`
 * - **`mention`**: locates the mention under the caret and replaces its content
 * - **`resolve`**: per-keystroke entry point combining the two
 *
 * ## Usage Pattern
 *
 * ```rust
 * use notemark_engine::editing::*;
 *
 * // 1. The user typed `@`
 * let typed = resolve_edit("ping ", "ping @", 6);
 * assert_eq!(typed.edit.text, "ping @[]");
 * assert_eq!(typed.search.as_deref(), Some(""));
 *
 * // 2. They picked someone from the directory
 * let done = replace_mention_content(typed.edit.cursor, &typed.edit.text, "Ann Lee").unwrap();
 * assert_eq!(done.text, "ping @[Ann Lee]");
 * assert_eq!(done.cursor, 15);
 * ```
 *
 * Each helper re-parses the paragraph it is given. Paragraphs are short and
 * edited interactively, so a second lex pass is cheaper than keeping offsets
 * in sync by hand.
 */

pub mod brackets;
pub mod edit;
pub mod mention;
pub mod resolve;

pub use brackets::auto_insert_mention_brackets;
pub use edit::Edit;
pub use mention::{accept_user_mention, mention_at_cursor, replace_mention_content};
pub use resolve::{ResolvedEdit, resolve_edit};
