use crate::form::{FormMode, PostForm};
use rinja::Template;

#[derive(Template)]
#[template(path = "components/post_form.txt")]
pub struct PostFormView<'f> {
    pub form: &'f PostForm,
    pub mode: FormMode,
}
