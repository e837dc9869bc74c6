// Static learning resource catalog shown on the career suggestions page.

pub mod catalog;
pub mod handlers;
