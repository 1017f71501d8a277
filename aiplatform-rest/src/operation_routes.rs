//! # Operation URL Families
//!
//! The parent resources that own operations, per API surface. Each pattern expands into
//! the `Get`, `List`, `Cancel`, `Delete` and `Wait` templates of
//! [`OperationRoutes`]. Every pattern ends in a distinct collection id, so an operation
//! name is matched by exactly one template of each family.
use aiplatform_rest_core::operations::OperationRoutes;
use once_cell::sync::Lazy;

/// Parents shared by every surface.
const COMMON: &[&str] = &[
    "projects/*/locations/*",
    "projects/*/locations/*/agents/*",
    "projects/*/locations/*/apps/*",
    "projects/*/locations/*/batchPredictionJobs/*",
    "projects/*/locations/*/customJobs/*",
    "projects/*/locations/*/dataLabelingJobs/*",
    "projects/*/locations/*/datasets/*",
    "projects/*/locations/*/datasets/*/annotationSpecs/*",
    "projects/*/locations/*/datasets/*/dataItems/*",
    "projects/*/locations/*/datasets/*/dataItems/*/annotations/*",
    "projects/*/locations/*/datasets/*/savedQueries/*",
    "projects/*/locations/*/deploymentResourcePools/*",
    "projects/*/locations/*/edgeDevices/*",
    "projects/*/locations/*/endpoints/*",
    "projects/*/locations/*/featureGroups/*",
    "projects/*/locations/*/featureGroups/*/features/*",
    "projects/*/locations/*/featureOnlineStores/*",
    "projects/*/locations/*/featureOnlineStores/*/featureViews/*",
    "projects/*/locations/*/featurestores/*",
    "projects/*/locations/*/featurestores/*/entityTypes/*",
    "projects/*/locations/*/featurestores/*/entityTypes/*/features/*",
    "projects/*/locations/*/hyperparameterTuningJobs/*",
    "projects/*/locations/*/indexEndpoints/*",
    "projects/*/locations/*/indexes/*",
    "projects/*/locations/*/metadataStores/*",
    "projects/*/locations/*/metadataStores/*/artifacts/*",
    "projects/*/locations/*/metadataStores/*/contexts/*",
    "projects/*/locations/*/metadataStores/*/executions/*",
    "projects/*/locations/*/migratableResources/*",
    "projects/*/locations/*/modelDeploymentMonitoringJobs/*",
    "projects/*/locations/*/models/*",
    "projects/*/locations/*/models/*/evaluations/*",
    "projects/*/locations/*/notebookExecutionJobs/*",
    "projects/*/locations/*/notebookRuntimes/*",
    "projects/*/locations/*/notebookRuntimeTemplates/*",
    "projects/*/locations/*/persistentResources/*",
    "projects/*/locations/*/pipelineJobs/*",
    "projects/*/locations/*/ragCorpora/*",
    "projects/*/locations/*/ragCorpora/*/ragFiles/*",
    "projects/*/locations/*/reasoningEngines/*",
    "projects/*/locations/*/schedules/*",
    "projects/*/locations/*/specialistPools/*",
    "projects/*/locations/*/studies/*",
    "projects/*/locations/*/studies/*/trials/*",
    "projects/*/locations/*/tensorboards/*",
    "projects/*/locations/*/tensorboards/*/experiments/*",
    "projects/*/locations/*/tensorboards/*/experiments/*/runs/*",
    "projects/*/locations/*/tensorboards/*/experiments/*/runs/*/timeSeries/*",
    "projects/*/locations/*/trainingPipelines/*",
    "projects/*/locations/*/tuningJobs/*",
];

/// Parents that only exist on the preview surfaces (`v1beta1`, `ui`).
const PREVIEW: &[&str] = &[
    "projects/*/locations/*/evaluationTasks/*",
    "projects/*/locations/*/exampleStores/*",
    "projects/*/locations/*/extensionControllers/*",
    "projects/*/locations/*/extensions/*",
    "projects/*/locations/*/featureOnlineStores/*/featureViews/*/featureViewSyncs/*",
    "projects/*/locations/*/modelMonitors/*",
    "projects/*/locations/*/notebookRuntimeTemplates/*/notebookRuntimes/*",
    "projects/*/locations/*/solvers/*",
];

/// Parents that only exist on the `ui` surface.
const UI_ONLY: &[&str] = &[
    "projects/*/locations/*/datasets/*/dataItems/*/annotations/*/labels/*",
    "projects/*/locations/*/endpoints/*/chat",
];

fn build(surfaces: &[&[&str]]) -> OperationRoutes {
    let parents: Vec<&str> = surfaces.iter().flat_map(|list| list.iter().copied()).collect();
    OperationRoutes::new(&parents)
}

pub static V1: Lazy<OperationRoutes> = Lazy::new(|| build(&[COMMON]));

pub static V1BETA1: Lazy<OperationRoutes> = Lazy::new(|| build(&[COMMON, PREVIEW]));

pub static UI: Lazy<OperationRoutes> = Lazy::new(|| build(&[COMMON, PREVIEW, UI_ONLY]));

/// The table of the surface served under `prefix`.
pub fn for_prefix(prefix: &str) -> &'static OperationRoutes {
    match prefix {
        "v1beta1" => &*V1BETA1,
        "ui" => &*UI,
        _ => &*V1,
    }
}

/// Every parent pattern of the surface served under `prefix`.
pub fn parents(prefix: &str) -> Vec<&'static str> {
    let surfaces: &[&[&str]] = match prefix {
        "v1beta1" => &[COMMON, PREVIEW],
        "ui" => &[COMMON, PREVIEW, UI_ONLY],
        _ => &[COMMON],
    };
    surfaces.iter().flat_map(|list| list.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiplatform_rest_core::operations::OperationVerb;

    fn sample_name(parent: &str) -> String {
        let concrete: Vec<String> = parent
            .split('/')
            .enumerate()
            .map(|(i, segment)| match segment {
                "*" => format!("id{i}"),
                literal => literal.to_string(),
            })
            .collect();
        format!("{}/operations/op1", concrete.join("/"))
    }

    #[test]
    fn test_every_operation_name_matches_exactly_one_template() {
        for prefix in ["v1", "v1beta1", "ui"] {
            let routes = for_prefix(prefix);
            for parent in parents(prefix) {
                let name = sample_name(parent);
                for verb in [
                    OperationVerb::Get,
                    OperationVerb::Cancel,
                    OperationVerb::Delete,
                    OperationVerb::Wait,
                ] {
                    let matches = routes.matching(verb, &name);
                    assert_eq!(matches.len(), 1, "{prefix} {verb} {name}");
                }
            }
        }
    }

    #[test]
    fn test_no_pattern_is_dropped() {
        for prefix in ["v1", "v1beta1", "ui"] {
            assert_eq!(
                for_prefix(prefix).family(OperationVerb::Get).len(),
                parents(prefix).len()
            );
        }
    }

    #[test]
    fn test_list_addresses_the_parent() {
        let path = V1
            .path(
                OperationVerb::List,
                "projects/p/locations/l/featurestores/f/entityTypes/e",
            )
            .unwrap();
        assert_eq!(
            path.join("/"),
            "projects/p/locations/l/featurestores/f/entityTypes/e/operations"
        );
    }

    #[test]
    fn test_preview_parents_only_route_on_preview_surfaces() {
        let name = "projects/p/locations/l/extensions/x/operations/op1";
        assert!(V1.resolve(OperationVerb::Get, name).is_err());
        assert!(V1BETA1.resolve(OperationVerb::Get, name).is_ok());
        assert!(UI.resolve(OperationVerb::Get, name).is_ok());
    }
}
