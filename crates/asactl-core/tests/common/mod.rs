#![allow(clippy::unwrap_used, dead_code)]
// In-memory ASA used by the reconciliation tests.
//
// Stores objects per collection, answers with the status codes the real
// device uses, and records every call so tests can assert on what was sent.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::{Value, json};

use asactl_core::{CoreError, DeviceClient, DeviceResponse, ObjectEndpoint};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(ObjectEndpoint, String),
    Create(ObjectEndpoint, Value),
    Update(ObjectEndpoint, String, Value),
    Patch(ObjectEndpoint, String, Value),
    Delete(ObjectEndpoint, String),
    AddMembers(String, Vec<Value>),
    RemoveMembers(String, Vec<Value>),
    WriteMem,
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Get(..))
    }
}

#[derive(Default)]
pub struct FakeDevice {
    objects: Mutex<HashMap<(ObjectEndpoint, String), Value>>,
    calls: Mutex<Vec<Call>>,
    /// Status returned by every read instead of the stored state.
    read_status: Mutex<Option<u16>>,
    /// Status returned by every mutating call instead of the usual one.
    write_status: Mutex<Option<u16>>,
}

impl FakeDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(self, endpoint: ObjectEndpoint, id: &str, body: Value) -> Self {
        self.objects
            .lock()
            .unwrap()
            .insert((endpoint, id.to_owned()), body);
        self
    }

    pub fn failing_reads(self, status: u16) -> Self {
        *self.read_status.lock().unwrap() = Some(status);
        self
    }

    pub fn failing_writes(self, status: u16) -> Self {
        *self.write_status.lock().unwrap() = Some(status);
        self
    }

    pub fn object(&self, endpoint: ObjectEndpoint, id: &str) -> Option<Value> {
        self.objects
            .lock()
            .unwrap()
            .get(&(endpoint, id.to_owned()))
            .cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn forced_write(&self) -> Option<DeviceResponse> {
        self.write_status.lock().unwrap().map(DeviceResponse::empty)
    }
}

fn id_of(endpoint: ObjectEndpoint, body: &Value) -> String {
    let key = match endpoint {
        ObjectEndpoint::Ikev1Policies => "objectId",
        _ => "name",
    };
    body[key].as_str().unwrap().to_owned()
}

impl DeviceClient for FakeDevice {
    fn host(&self) -> String {
        "asa.example.net".into()
    }

    async fn get_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
    ) -> Result<DeviceResponse, CoreError> {
        self.record(Call::Get(endpoint, id.to_owned()));
        if let Some(status) = *self.read_status.lock().unwrap() {
            return Ok(DeviceResponse::empty(status));
        }
        Ok(match self.object(endpoint, id) {
            Some(body) => DeviceResponse::new(200, Some(body)),
            None => DeviceResponse::new(404, Some(json!({ "messages": [] }))),
        })
    }

    async fn create_object(
        &self,
        endpoint: ObjectEndpoint,
        body: &Value,
    ) -> Result<DeviceResponse, CoreError> {
        self.record(Call::Create(endpoint, body.clone()));
        if let Some(failed) = self.forced_write() {
            return Ok(failed);
        }
        self.objects
            .lock()
            .unwrap()
            .insert((endpoint, id_of(endpoint, body)), body.clone());
        Ok(DeviceResponse::empty(201))
    }

    async fn update_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
        body: &Value,
    ) -> Result<DeviceResponse, CoreError> {
        self.record(Call::Update(endpoint, id.to_owned(), body.clone()));
        if let Some(failed) = self.forced_write() {
            return Ok(failed);
        }
        self.objects
            .lock()
            .unwrap()
            .insert((endpoint, id.to_owned()), body.clone());
        Ok(DeviceResponse::empty(204))
    }

    async fn patch_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
        body: &Value,
    ) -> Result<DeviceResponse, CoreError> {
        self.record(Call::Patch(endpoint, id.to_owned(), body.clone()));
        if let Some(failed) = self.forced_write() {
            return Ok(failed);
        }
        let mut objects = self.objects.lock().unwrap();
        if let Some(Value::Object(existing)) = objects.get_mut(&(endpoint, id.to_owned())) {
            for (key, value) in body.as_object().unwrap() {
                existing.insert(key.clone(), value.clone());
            }
        }
        Ok(DeviceResponse::empty(204))
    }

    async fn delete_object(
        &self,
        endpoint: ObjectEndpoint,
        id: &str,
    ) -> Result<DeviceResponse, CoreError> {
        self.record(Call::Delete(endpoint, id.to_owned()));
        if let Some(failed) = self.forced_write() {
            return Ok(failed);
        }
        self.objects
            .lock()
            .unwrap()
            .remove(&(endpoint, id.to_owned()));
        Ok(DeviceResponse::empty(204))
    }

    async fn add_group_members(
        &self,
        group: &str,
        members: &[Value],
    ) -> Result<DeviceResponse, CoreError> {
        self.record(Call::AddMembers(group.to_owned(), members.to_vec()));
        if let Some(failed) = self.forced_write() {
            return Ok(failed);
        }
        let mut objects = self.objects.lock().unwrap();
        if let Some(existing) =
            objects.get_mut(&(ObjectEndpoint::NetworkObjectGroups, group.to_owned()))
        {
            let list = existing
                .as_object_mut()
                .unwrap()
                .entry("members")
                .or_insert_with(|| json!([]));
            list.as_array_mut().unwrap().extend(members.iter().cloned());
        }
        Ok(DeviceResponse::empty(204))
    }

    async fn remove_group_members(
        &self,
        group: &str,
        members: &[Value],
    ) -> Result<DeviceResponse, CoreError> {
        self.record(Call::RemoveMembers(group.to_owned(), members.to_vec()));
        if let Some(failed) = self.forced_write() {
            return Ok(failed);
        }
        let mut objects = self.objects.lock().unwrap();
        if let Some(existing) =
            objects.get_mut(&(ObjectEndpoint::NetworkObjectGroups, group.to_owned()))
        {
            if let Some(list) = existing.get_mut("members").and_then(Value::as_array_mut) {
                list.retain(|m| !members.contains(m));
            }
        }
        Ok(DeviceResponse::empty(204))
    }

    async fn write_mem(&self) -> Result<DeviceResponse, CoreError> {
        self.record(Call::WriteMem);
        if let Some(failed) = self.forced_write() {
            return Ok(failed);
        }
        Ok(DeviceResponse::new(200, Some(json!({ "response": ["[OK]"] }))))
    }
}
