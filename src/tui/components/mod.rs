// Components module - the pieces of the launcher window
//
// - Search bar: prompt, query text and cursor
// - Results panel: the scrollable result list with the focused row highlighted
// - Status bar: result count, pending spinner, last problem, key hints
// - Toast: transient failure notices

pub mod results_panel;
pub mod search_bar;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;
