// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Native Kubernetes API client.
//!
//! Manifests are applied with server-side apply as untyped
//! [`DynamicObject`]s; deletes go through the typed APIs of the four kinds a
//! launch creates.

use std::fmt::Debug;

use async_trait::async_trait;
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::{ConfigMap, Pod, Secret, Service};
use k8s_openapi::NamespaceResourceScope;
use kube::api::{Api, DeleteParams, DynamicObject, GroupVersionKind, ListParams, Patch, PatchParams};
use kube::discovery::ApiResource;
use kube::{Client, Resource};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ClusterClient, ClusterError, DeleteOutcome, ResourceKind};

/// Field manager recorded on server-side applied objects.
const FIELD_MANAGER: &str = "batchinfer";

/// Control-plane client backed by `kube-rs`.
#[derive(Clone)]
pub struct KubeApiClient {
    client: Client,
    namespace: String,
}

impl KubeApiClient {
    /// Connect using the ambient kubeconfig or in-cluster config.
    pub async fn new(namespace: Option<String>) -> Result<Self, ClusterError> {
        let client = Client::try_default().await?;
        let namespace = namespace.unwrap_or_else(|| client.default_namespace().to_string());
        Ok(Self { client, namespace })
    }

    async fn apply_object(&self, obj: &serde_json::Value) -> Result<(), ClusterError> {
        let target = ObjectRef::from_value(obj)?;
        let namespace = target.namespace.as_deref().unwrap_or(&self.namespace);
        let api_resource = ApiResource::from_gvk(&target.gvk);
        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), namespace, &api_resource);

        let params = PatchParams::apply(FIELD_MANAGER).force();
        api.patch(&target.name, &params, &Patch::Apply(obj)).await?;
        tracing::info!(
            kind = %target.gvk.kind,
            name = %target.name,
            %namespace,
            "applied manifest"
        );
        Ok(())
    }

    async fn delete_typed<K>(&self, name: &str) -> Result<DeleteOutcome, ClusterError>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        <K as Resource>::DynamicType: Default,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), &self.namespace);
        match api.delete(name, &DeleteParams::background()).await {
            Ok(_) => Ok(DeleteOutcome::Deleted),
            Err(kube::Error::Api(resp)) if resp.code == 404 => Ok(DeleteOutcome::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ClusterClient for KubeApiClient {
    async fn probe(&self) -> Result<(), ClusterError> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), &self.namespace);
        pods.list(&ListParams::default().limit(1)).await?;
        Ok(())
    }

    async fn apply(&self, manifest: &str) -> Result<(), ClusterError> {
        // The YAML parser is not Send, so finish parsing before the first await
        let objects = parse_documents(manifest)?;
        for obj in &objects {
            self.apply_object(obj).await?;
        }
        Ok(())
    }

    async fn delete(&self, kind: ResourceKind, name: &str) -> Result<DeleteOutcome, ClusterError> {
        match kind {
            ResourceKind::Job => self.delete_typed::<Job>(name).await,
            ResourceKind::Service => self.delete_typed::<Service>(name).await,
            ResourceKind::ConfigMap => self.delete_typed::<ConfigMap>(name).await,
            ResourceKind::Secret => self.delete_typed::<Secret>(name).await,
        }
    }
}

/// Every non-empty YAML document in `manifest`, as JSON.
fn parse_documents(manifest: &str) -> Result<Vec<serde_json::Value>, ClusterError> {
    let mut objects = Vec::new();
    for doc in serde_yaml::Deserializer::from_str(manifest) {
        let obj = serde_json::Value::deserialize(doc)
            .map_err(|e| ClusterError::InvalidManifest(e.to_string()))?;
        if !obj.is_null() {
            objects.push(obj);
        }
    }
    Ok(objects)
}

/// Identity of an untyped manifest object.
#[derive(Debug, PartialEq)]
struct ObjectRef {
    gvk: GroupVersionKind,
    name: String,
    namespace: Option<String>,
}

impl ObjectRef {
    fn from_value(obj: &serde_json::Value) -> Result<Self, ClusterError> {
        let field = |pointer: &str| obj.pointer(pointer).and_then(|v| v.as_str());
        let missing = |what: &str| ClusterError::InvalidManifest(format!("missing {}", what));

        let kind = field("/kind").ok_or_else(|| missing("kind"))?;
        let api_version = field("/apiVersion").ok_or_else(|| missing("apiVersion"))?;
        let name = field("/metadata/name").ok_or_else(|| missing("metadata.name"))?;

        let (group, version) = match api_version.split_once('/') {
            Some((group, version)) => (group, version),
            None => ("", api_version),
        };
        Ok(Self {
            gvk: GroupVersionKind::gvk(group, version, kind),
            name: name.to_string(),
            namespace: field("/metadata/namespace").map(str::to_string),
        })
    }
}

#[cfg(test)]
#[path = "kube_api_tests.rs"]
mod tests;
