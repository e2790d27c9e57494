//! DOM helpers for the dashboard component: reading control values and
//! assembling the upload form.

use wasm_bindgen::JsValue;
use web_sys::{FileList, FormData, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use dashboard_sync::ClientError;

/// Multipart field name the backend reads uploaded files from.
pub const UPLOAD_FIELD: &str = "files[]";

/// Current value of the `<select>` that fired `event`.
pub fn select_value(event: Event) -> String {
    let select: HtmlSelectElement = event.target_unchecked_into();
    select.value()
}

/// Current value of the `<input>` that fired `event`.
pub fn input_value(event: InputEvent) -> String {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.value()
}

fn selected_files(file_input: &NodeRef) -> Option<FileList> {
    file_input.cast::<HtmlInputElement>().and_then(|input| input.files())
}

/// Number of files currently chosen in the file input.
pub fn selected_file_count(file_input: &NodeRef) -> usize {
    selected_files(file_input).map_or(0, |files| files.length() as usize)
}

/// Builds the multipart body with one `files[]` part per chosen file.
pub fn upload_form(file_input: &NodeRef) -> Result<FormData, ClientError> {
    let form = FormData::new().map_err(dom_error)?;
    if let Some(files) = selected_files(file_input) {
        for index in 0..files.length() {
            if let Some(file) = files.get(index) {
                form.append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
                    .map_err(dom_error)?;
            }
        }
    }
    Ok(form)
}

fn dom_error(err: JsValue) -> ClientError {
    ClientError::LocalFailure(format!("{err:?}"))
}
