use crate::model::Alert;
use rinja::Template;

#[derive(Template)]
#[template(path = "layout.txt")]
pub struct Layout {
    pub messages: Vec<Alert>,
    pub content: String,
    pub version_string: &'static str,
    pub loading: bool,
}
