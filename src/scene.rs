// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Manual scenes.

use serde::Deserialize;
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::{Error, ParseError, Result};
use crate::protocol::{CommandResult, Protocol};

/// Raw entry of `GET scenes`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneRecord {
    scene_id: String,
    #[serde(default)]
    scene_name: String,
}

/// A manual scene configured in the SwitchBot app.
#[derive(Debug)]
pub struct Scene<P: Protocol> {
    scene_id: String,
    scene_name: String,
    api: ApiClient<P>,
}

impl<P: Protocol> Scene<P> {
    /// Parses the body of `GET scenes`. A null body is an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not a list of scenes.
    pub fn list_from_body(api: &ApiClient<P>, body: &Value) -> Result<Vec<Self>> {
        if body.is_null() {
            return Ok(Vec::new());
        }
        let records: Vec<SceneRecord> =
            serde_json::from_value(body.clone()).map_err(ParseError::from)?;
        Ok(records
            .into_iter()
            .map(|record| Self {
                scene_id: record.scene_id,
                scene_name: record.scene_name,
                api: api.clone(),
            })
            .collect())
    }

    /// Scene id.
    #[must_use]
    pub fn scene_id(&self) -> &str {
        &self.scene_id
    }

    /// Display name.
    #[must_use]
    pub fn scene_name(&self) -> &str {
        &self.scene_name
    }

    /// Runs the scene.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn execute(&self) -> Result<CommandResult> {
        tracing::debug!(scene_id = %self.scene_id, "Executing scene");
        Ok(self.api.execute_scene(&self.scene_id).await?)
    }
}

/// Picks the scene with `scene_id`: `None` if absent, an error if several.
pub(crate) fn find_scene<P: Protocol>(scenes: Vec<Scene<P>>, scene_id: &str) -> Result<Option<Scene<P>>> {
    let mut matches = scenes.into_iter().filter(|scene| scene.scene_id == scene_id);
    let first = matches.next();
    if matches.next().is_some() {
        return Err(Error::DuplicateId {
            resource: "scene",
            id: scene_id.to_string(),
        });
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::testing::MockProtocol;

    fn scenes(api: &ApiClient<MockProtocol>) -> Vec<Scene<MockProtocol>> {
        Scene::list_from_body(
            api,
            &json!([
                {"sceneId": "T01", "sceneName": "Good night"},
                {"sceneId": "T02", "sceneName": "Movie"},
                {"sceneId": "T02", "sceneName": "Movie (copy)"},
            ]),
        )
        .unwrap()
    }

    #[test]
    fn lookup() {
        let api = ApiClient::new(MockProtocol::new());

        let scene = find_scene(scenes(&api), "T01").unwrap().unwrap();
        assert_eq!(scene.scene_name(), "Good night");

        assert!(find_scene(scenes(&api), "T99").unwrap().is_none());
        assert!(matches!(
            find_scene(scenes(&api), "T02"),
            Err(Error::DuplicateId { resource: "scene", .. })
        ));
    }

    #[test]
    fn malformed_list() {
        let api = ApiClient::new(MockProtocol::new());
        assert!(matches!(
            Scene::list_from_body(&api, &json!({"sceneId": "T01"})),
            Err(Error::Parse(ParseError::Json(_)))
        ));
        assert!(Scene::list_from_body(&api, &Value::Null).unwrap().is_empty());
    }

    #[tokio::test]
    async fn execute() {
        let api = ApiClient::new(MockProtocol::new().ok(json!({})));
        let scene = find_scene(scenes(&api), "T01").unwrap().unwrap();
        let result = scene.execute().await.unwrap();

        assert!(result.is_success());
        assert_eq!(api.protocol().requests()[0].path, "scenes/T01/execute");
    }
}
