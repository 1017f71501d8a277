//! # Feature Store Service (`v1beta1`)
//!
//! Featurestores contain entity types, which contain features. Features may also belong
//! to a feature group, in which case the `featureGroups` bindings of the feature RPCs are
//! used.
//!
//! Creating or deleting anything, and updating a featurestore, is long-running; the
//! other RPCs answer directly.
mod interceptor;
pub mod routes;
mod transport;
mod types;

pub use interceptor::{DefaultFeaturestoreServiceInterceptor, FeaturestoreServiceInterceptor};
pub use transport::{
    CREATE_ENTITY_TYPE, CREATE_FEATURE, CREATE_FEATURESTORE, DELETE_ENTITY_TYPE, DELETE_FEATURE,
    DELETE_FEATURESTORE, FeaturestoreServiceRestTransport, GET_ENTITY_TYPE, GET_FEATURE,
    GET_FEATURESTORE, LIST_ENTITY_TYPES, LIST_FEATURES, LIST_FEATURESTORES, UPDATE_ENTITY_TYPE,
    UPDATE_FEATURE, UPDATE_FEATURESTORE, VERSION,
};
pub use types::*;
