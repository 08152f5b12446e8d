use std::fmt::Display;

use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Print a page as pretty JSON or as its plain-text rendering.
pub fn print_page<T: Serialize + Display>(json: bool, page: &T) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data: page })?
        );
    } else {
        print!("{page}");
    }
    Ok(())
}
