/// Note endpoints
///
/// All three take the session id in the JSON body:
///
/// - `GET /notes` `{sid}` - List the caller's notes
/// - `POST /notes` `{sid, note}` - Create a note
/// - `DELETE /notes` `{sid, id}` - Delete one of the caller's notes
///
/// Each request resolves `sid` to the login email, then the email to the
/// owning user id. Every store call is filtered by that id.
///
/// Absent fields take their zero value: an empty `sid` fails as an unknown
/// session and a missing `id` targets note 0.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::JsonBody,
};
use axum::{extract::State, http::StatusCode, Json};
use notekeep_shared::models::{note::Note, user::User};
use serde::{Deserialize, Serialize};

/// List request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListNotesRequest {
    pub sid: String,
}

/// Create request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateNoteRequest {
    pub sid: String,
    pub note: String,
}

/// Delete request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteNoteRequest {
    pub sid: String,
    pub id: i64,
}

/// A note as returned to its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteView {
    pub id: i64,
    pub note: String,
}

impl From<Note> for NoteView {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            note: note.text,
        }
    }
}

/// List response
#[derive(Debug, Serialize, Deserialize)]
pub struct ListNotesResponse {
    pub notes: Vec<NoteView>,
}

/// Create response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateNoteResponse {
    pub id: i64,
}

/// Resolves a session id to the id of the user who owns it
///
/// Fails with 401 when the session is unknown or when no user with the
/// session's email exists any more.
async fn authenticate(state: &AppState, sid: &str) -> ApiResult<i64> {
    let email = state.sessions.resolve(sid).await?;

    let user = User::find_by_email(&state.db, &email)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Owner lookup failed");
            ApiError::Unauthorized("User not found".to_string())
        })?
        .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

    Ok(user.id)
}

/// List the caller's notes
///
/// ```text
/// GET /notes
///
/// {"sid": "9f2c…"}
/// ```
///
/// Response:
///
/// ```json
/// {"notes": [{"id": 1, "note": "buy milk"}]}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Body is not JSON or `sid` is not a string
/// - `401 Unauthorized`: Unknown session or vanished user
/// - `500 Internal Server Error`: The notes query failed
pub async fn list_notes(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ListNotesRequest>,
) -> ApiResult<Json<ListNotesResponse>> {
    let owner_id = authenticate(&state, &req.sid).await?;

    let notes = Note::list_by_owner(&state.db, owner_id).await?;

    Ok(Json(ListNotesResponse {
        notes: notes.into_iter().map(NoteView::from).collect(),
    }))
}

/// Create a note
///
/// ```text
/// POST /notes
///
/// {"sid": "9f2c…", "note": "buy milk"}
/// ```
///
/// Response carries the id of the inserted row:
///
/// ```json
/// {"id": 1}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Body is not JSON or a field has the wrong type
/// - `401 Unauthorized`: Unknown session or vanished user
/// - `500 Internal Server Error`: The insert failed
pub async fn create_note(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateNoteRequest>,
) -> ApiResult<Json<CreateNoteResponse>> {
    let owner_id = authenticate(&state, &req.sid).await?;

    let id = Note::create(&state.db, owner_id, &req.note).await?;

    tracing::info!(note_id = id, owner_id, "Note created");
    Ok(Json(CreateNoteResponse { id }))
}

/// Delete one of the caller's notes
///
/// ```text
/// DELETE /notes
///
/// {"sid": "9f2c…", "id": 1}
/// ```
///
/// Responds `200` with an empty body whether or not a note was removed:
/// an id that does not exist or belongs to someone else is left alone.
///
/// # Errors
///
/// - `400 Bad Request`: Body is not JSON or `id` is not an integer
/// - `401 Unauthorized`: Unknown session or vanished user
/// - `500 Internal Server Error`: The delete failed
pub async fn delete_note(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<DeleteNoteRequest>,
) -> ApiResult<StatusCode> {
    let owner_id = authenticate(&state, &req.sid).await?;

    let deleted = Note::delete(&state.db, req.id, owner_id).await?;

    tracing::info!(note_id = req.id, owner_id, deleted, "Note delete requested");
    Ok(StatusCode::OK)
}
