// ── Device client capability ──
//
// The reconciler talks to the device through this trait only. `AsaClient`
// is the production implementation; tests substitute an in-memory device.
// Transport failures are captured here and nowhere else.

use std::future::Future;

use serde_json::Value;

use asactl_api::{AsaClient, DeviceResponse, ObjectEndpoint};

use crate::error::CoreError;

/// Typed get/create/update/delete operations against one device.
pub trait DeviceClient: Send + Sync {
    /// Device authority (`host` or `host:port`) used in self and ref links.
    fn host(&self) -> String;

    fn get_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
    ) -> impl Future<Output = Result<DeviceResponse, CoreError>> + Send;

    fn create_object(
        &self,
        endpoint: ObjectEndpoint,
        body: &Value,
    ) -> impl Future<Output = Result<DeviceResponse, CoreError>> + Send;

    fn update_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
        body: &Value,
    ) -> impl Future<Output = Result<DeviceResponse, CoreError>> + Send;

    fn patch_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
        body: &Value,
    ) -> impl Future<Output = Result<DeviceResponse, CoreError>> + Send;

    fn delete_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
    ) -> impl Future<Output = Result<DeviceResponse, CoreError>> + Send;

    fn add_group_members(
        &self,
        group: &str,
        members: &[Value],
    ) -> impl Future<Output = Result<DeviceResponse, CoreError>> + Send;

    fn remove_group_members(
        &self,
        group: &str,
        members: &[Value],
    ) -> impl Future<Output = Result<DeviceResponse, CoreError>> + Send;

    fn write_mem(&self) -> impl Future<Output = Result<DeviceResponse, CoreError>> + Send;
}

impl DeviceClient for AsaClient {
    fn host(&self) -> String {
        AsaClient::host(self)
    }

    async fn get_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
    ) -> Result<DeviceResponse, CoreError> {
        Ok(AsaClient::get_object(self, endpoint, id).await?)
    }

    async fn create_object(
        &self,
        endpoint: ObjectEndpoint,
        body: &Value,
    ) -> Result<DeviceResponse, CoreError> {
        Ok(AsaClient::create_object(self, endpoint, body).await?)
    }

    async fn update_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
        body: &Value,
    ) -> Result<DeviceResponse, CoreError> {
        Ok(AsaClient::update_object(self, endpoint, id, body).await?)
    }

    async fn patch_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
        body: &Value,
    ) -> Result<DeviceResponse, CoreError> {
        Ok(AsaClient::patch_object(self, endpoint, id, body).await?)
    }

    async fn delete_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
    ) -> Result<DeviceResponse, CoreError> {
        Ok(AsaClient::delete_object(self, endpoint, id).await?)
    }

    async fn add_group_members(
        &self,
        group: &str,
        members: &[Value],
    ) -> Result<DeviceResponse, CoreError> {
        Ok(AsaClient::add_group_members(self, group, members).await?)
    }

    async fn remove_group_members(
        &self,
        group: &str,
        members: &[Value],
    ) -> Result<DeviceResponse, CoreError> {
        Ok(AsaClient::remove_group_members(self, group, members).await?)
    }

    async fn write_mem(&self) -> Result<DeviceResponse, CoreError> {
        Ok(AsaClient::write_mem(self).await?)
    }
}
