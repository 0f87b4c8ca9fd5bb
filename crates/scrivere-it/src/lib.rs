// scrivere-it: Italian writing assistance.
//
// Two independent engines plus a template catalog:
//   - `suggestion`: table-driven spelling/formality suggestions
//   - `layout`:     greedy word wrap and pagination for document export
//   - `templates`:  canned Italian letter skeletons
// `handle::ScrivereHandle` ties them together for outer layers.

pub mod tokenizer;

#[cfg(feature = "check")]
pub mod rules;
#[cfg(feature = "check")]
pub mod suggestion;

#[cfg(feature = "layout")]
pub mod layout;

#[cfg(feature = "templates")]
pub mod templates;

#[cfg(feature = "handle")]
pub mod handle;
