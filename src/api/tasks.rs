//! Task Endpoints
//!
//! Bindings for the `/tasks/` collection.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use super::{ApiClient, ApiResult, Method};
use crate::models::{Task, TaskId, TaskState};

pub const LIST_FAILED: &str = "Failed to load tasks";
pub const CREATE_FAILED: &str = "Failed to create task";
pub const STATE_FAILED: &str = "Failed to update task state";
pub const TITLE_FAILED: &str = "Failed to update task title";
pub const DELETE_FAILED: &str = "Failed to delete task";

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ========================
// Argument Structs
// ========================

#[derive(Debug, Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub username: &'a str,
    pub state: TaskState,
}

#[derive(Debug, Default, Serialize)]
struct UpdateTaskArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<TaskState>,
}

pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

fn task_path(id: TaskId) -> String {
    format!("/tasks/{}", id)
}

// ========================
// Calls
// ========================

/// All tasks owned by `username`. An empty body counts as an empty list.
pub async fn list_tasks(api: &ApiClient, username: &str) -> ApiResult<Vec<Task>> {
    let endpoint = format!("/tasks/?username={}", encode_query_value(username));
    let tasks = api.call::<Vec<Task>>(Method::Get, &endpoint, LIST_FAILED).await?;
    Ok(tasks.unwrap_or_default())
}

pub async fn create_task(api: &ApiClient, args: &CreateTaskArgs<'_>) -> ApiResult<Option<Task>> {
    api.send(Method::Post, "/tasks/", args, CREATE_FAILED).await
}

pub async fn update_task_state(
    api: &ApiClient,
    id: TaskId,
    state: TaskState,
) -> ApiResult<Option<Task>> {
    let args = UpdateTaskArgs {
        state: Some(state),
        ..Default::default()
    };
    api.send(Method::Put, &task_path(id), &args, STATE_FAILED).await
}

pub async fn update_task_title(
    api: &ApiClient,
    id: TaskId,
    title: &str,
) -> ApiResult<Option<Task>> {
    let args = UpdateTaskArgs {
        title: Some(title),
        ..Default::default()
    };
    api.send(Method::Put, &task_path(id), &args, TITLE_FAILED).await
}

pub async fn delete_task(api: &ApiClient, id: TaskId) -> ApiResult<Option<Task>> {
    api.call(Method::Delete, &task_path(id), DELETE_FAILED).await
}
