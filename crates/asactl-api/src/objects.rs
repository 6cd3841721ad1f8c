// Object endpoints
//
// Generic CRUD over the object collections plus the object-group member
// patches. Callers pick the collection through `ObjectEndpoint`.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::AsaClient;
use crate::error::Error;
use crate::models::{DeviceResponse, ObjectEndpoint};

impl AsaClient {
    /// Read a single object.
    ///
    /// `GET /{collection}/{id}`
    pub async fn get_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
    ) -> Result<DeviceResponse, Error> {
        let url = self.item_url(endpoint.path(), id)?;
        debug!(%endpoint, id, "fetching object");
        self.get(url).await
    }

    /// Create an object; the ASA answers 201 on success.
    ///
    /// `POST /{collection}`
    pub async fn create_object(
        &self,
        endpoint: ObjectEndpoint,
        body: &Value,
    ) -> Result<DeviceResponse, Error> {
        let url = self.api_url(endpoint.path())?;
        debug!(%endpoint, "creating object");
        self.post(url, body).await
    }

    /// Replace an object; the ASA answers 204 on success.
    ///
    /// `PUT /{collection}/{id}`
    pub async fn update_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
        body: &Value,
    ) -> Result<DeviceResponse, Error> {
        let url = self.item_url(endpoint.path(), id)?;
        debug!(%endpoint, id, "updating object");
        self.put(url, body).await
    }

    /// Partially update an object; the ASA answers 204 on success.
    ///
    /// `PATCH /{collection}/{id}`
    pub async fn patch_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
        body: &Value,
    ) -> Result<DeviceResponse, Error> {
        let url = self.item_url(endpoint.path(), id)?;
        debug!(%endpoint, id, "patching object");
        self.patch(url, body).await
    }

    /// Delete an object; the ASA answers 204 on success.
    ///
    /// `DELETE /{collection}/{id}`
    pub async fn delete_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
    ) -> Result<DeviceResponse, Error> {
        let url = self.item_url(endpoint.path(), id)?;
        debug!(%endpoint, id, "deleting object");
        self.delete(url).await
    }

    // ── Object-group membership ──────────────────────────────────────

    /// Add members to a network object-group.
    ///
    /// `PATCH /api/objects/networkobjectgroups/{id}` with `{"members.add": [...]}`
    pub async fn add_group_members(
        &self,
        group: &str,
        members: &[Value],
    ) -> Result<DeviceResponse, Error> {
        self.patch_object(
            ObjectEndpoint::NetworkObjectGroups,
            group,
            &json!({ "members.add": members }),
        )
        .await
    }

    /// Remove members from a network object-group.
    ///
    /// `PATCH /api/objects/networkobjectgroups/{id}` with `{"members.remove": [...]}`
    pub async fn remove_group_members(
        &self,
        group: &str,
        members: &[Value],
    ) -> Result<DeviceResponse, Error> {
        self.patch_object(
            ObjectEndpoint::NetworkObjectGroups,
            group,
            &json!({ "members.remove": members }),
        )
        .await
    }
}
