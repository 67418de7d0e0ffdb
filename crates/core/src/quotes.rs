//! Fixed identities and payloads of the quote board.
//!
//! The update route never looks up the record named in the request body.
//! It always rewrites the most recent record named [`UPDATE_TARGET_NAME`],
//! inserting one when none exists.

use serde_json::{json, Value};

/// Name of the record every update request re-targets.
pub const UPDATE_TARGET_NAME: &str = "Yoda";

/// Body returned (as a JSON string) after a successful delete.
pub const DELETE_CONFIRMATION: &str = "A darth vadar quote got deleted";

/// Entity label used in not-found errors.
pub const QUOTE_ENTITY: &str = "Quote";

/// Speaker written by the client's update button.
pub const CLIENT_UPDATE_NAME: &str = "Darth Vadar";

/// Quote written by the client's update button.
pub const CLIENT_UPDATE_QUOTE: &str = "I find you lack of faith disturbing.";

/// Speaker removed by the client's delete button.
pub const CLIENT_DELETE_NAME: &str = "Elmer";

/// JSON body sent by the update button.
pub fn client_update_payload() -> Value {
    json!({
        "name": CLIENT_UPDATE_NAME,
        "quote": CLIENT_UPDATE_QUOTE,
    })
}

/// JSON body sent by the delete button.
pub fn client_delete_payload() -> Value {
    json!({ "name": CLIENT_DELETE_NAME })
}
