use aiplatform_rest_core::routing::{HttpRule, Route};

pub static CREATE_FEATURESTORE: Route = Route::new(
    "CreateFeaturestore",
    &[HttpRule::post(
        "/{parent=projects/*/locations/*}/featurestores",
        "featurestore",
    )],
);

pub static GET_FEATURESTORE: Route = Route::new(
    "GetFeaturestore",
    &[HttpRule::get("/{name=projects/*/locations/*/featurestores/*}")],
);

pub static LIST_FEATURESTORES: Route = Route::new(
    "ListFeaturestores",
    &[HttpRule::get("/{parent=projects/*/locations/*}/featurestores")],
);

pub static UPDATE_FEATURESTORE: Route = Route::new(
    "UpdateFeaturestore",
    &[HttpRule::patch(
        "/{featurestore.name=projects/*/locations/*/featurestores/*}",
        "featurestore",
    )],
);

pub static DELETE_FEATURESTORE: Route = Route::new(
    "DeleteFeaturestore",
    &[HttpRule::delete("/{name=projects/*/locations/*/featurestores/*}")],
);

pub static CREATE_ENTITY_TYPE: Route = Route::new(
    "CreateEntityType",
    &[HttpRule::post(
        "/{parent=projects/*/locations/*/featurestores/*}/entityTypes",
        "entity_type",
    )],
);

pub static GET_ENTITY_TYPE: Route = Route::new(
    "GetEntityType",
    &[HttpRule::get(
        "/{name=projects/*/locations/*/featurestores/*/entityTypes/*}",
    )],
);

pub static LIST_ENTITY_TYPES: Route = Route::new(
    "ListEntityTypes",
    &[HttpRule::get(
        "/{parent=projects/*/locations/*/featurestores/*}/entityTypes",
    )],
);

pub static UPDATE_ENTITY_TYPE: Route = Route::new(
    "UpdateEntityType",
    &[HttpRule::patch(
        "/{entity_type.name=projects/*/locations/*/featurestores/*/entityTypes/*}",
        "entity_type",
    )],
);

pub static DELETE_ENTITY_TYPE: Route = Route::new(
    "DeleteEntityType",
    &[HttpRule::delete(
        "/{name=projects/*/locations/*/featurestores/*/entityTypes/*}",
    )],
);

// Features live under an entity type or, since feature groups, under a feature group.

pub static CREATE_FEATURE: Route = Route::new(
    "CreateFeature",
    &[
        HttpRule::post(
            "/{parent=projects/*/locations/*/featurestores/*/entityTypes/*}/features",
            "feature",
        ),
        HttpRule::post(
            "/{parent=projects/*/locations/*/featureGroups/*}/features",
            "feature",
        ),
    ],
);

pub static GET_FEATURE: Route = Route::new(
    "GetFeature",
    &[
        HttpRule::get("/{name=projects/*/locations/*/featurestores/*/entityTypes/*/features/*}"),
        HttpRule::get("/{name=projects/*/locations/*/featureGroups/*/features/*}"),
    ],
);

pub static LIST_FEATURES: Route = Route::new(
    "ListFeatures",
    &[
        HttpRule::get("/{parent=projects/*/locations/*/featurestores/*/entityTypes/*}/features"),
        HttpRule::get("/{parent=projects/*/locations/*/featureGroups/*}/features"),
    ],
);

pub static UPDATE_FEATURE: Route = Route::new(
    "UpdateFeature",
    &[
        HttpRule::patch(
            "/{feature.name=projects/*/locations/*/featurestores/*/entityTypes/*/features/*}",
            "feature",
        ),
        HttpRule::patch(
            "/{feature.name=projects/*/locations/*/featureGroups/*/features/*}",
            "feature",
        ),
    ],
);

pub static DELETE_FEATURE: Route = Route::new(
    "DeleteFeature",
    &[
        HttpRule::delete(
            "/{name=projects/*/locations/*/featurestores/*/entityTypes/*/features/*}",
        ),
        HttpRule::delete("/{name=projects/*/locations/*/featureGroups/*/features/*}"),
    ],
);
