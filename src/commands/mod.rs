//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

mod error;
mod todo;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use error::CommandError;
pub use todo::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Tauri rejects with the command's error string, anything else is debug-printed
fn rejection_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

async fn invoke_raw<A: Serialize>(command: &'static str, args: &A) -> Result<JsValue, CommandError> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| CommandError::Serialize {
        command,
        message: e.to_string(),
    })?;
    log::debug!("[CMD] {}", command);
    invoke(command, js_args).await.map_err(|e| CommandError::Rejected {
        command,
        message: rejection_message(&e),
    })
}

/// Invoke a command and decode its response
async fn call<A, R>(command: &'static str, args: &A) -> Result<R, CommandError>
where
    A: Serialize,
    R: DeserializeOwned,
{
    let result = invoke_raw(command, args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| CommandError::Deserialize {
        command,
        message: e.to_string(),
    })
}

/// Invoke a command whose response carries nothing
async fn invoke_unit<A: Serialize>(command: &'static str, args: &A) -> Result<(), CommandError> {
    invoke_raw(command, args).await.map(|_| ())
}
