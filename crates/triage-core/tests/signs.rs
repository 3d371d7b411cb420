use triage_core::error::CoreError;
use triage_core::signs::{BodySystem, SignRegistry};

#[test]
fn standard_registry_builds_and_covers_all_systems() {
    let registry = SignRegistry::standard().unwrap();
    assert!(!registry.is_empty());

    let per_system: usize = BodySystem::ALL
        .iter()
        .map(|s| registry.signs_for_system(*s).len())
        .sum();
    assert_eq!(registry.len(), per_system, "merge lost or shadowed a sign");
}

#[test]
fn lookup_returns_table_weights() {
    let registry = SignRegistry::standard().unwrap();

    let arrest = registry.lookup("arrêt_cardiaque").unwrap();
    assert_eq!(arrest.weight, 100.0);
    assert_eq!(arrest.system, BodySystem::Cardiovascular);

    let coma = registry.lookup("coma").unwrap();
    assert_eq!(coma.weight, 100.0);
    assert_eq!(coma.system, BodySystem::Neurological);
}

#[test]
fn unknown_sign_is_not_found_rather_than_zero() {
    let registry = SignRegistry::standard().unwrap();
    assert!(registry.lookup("céphalée_banale").is_none());
}

#[test]
fn max_severity_takes_the_worst_finding_not_the_mean() {
    let registry = SignRegistry::standard().unwrap();

    let severity = registry
        .max_severity(["wheezing_diffus", "apnée", "diarrhée_sanglante"])
        .unwrap();
    // 65, 95, 70 -> max is 95, mean would be ~76.7.
    assert_eq!(severity, Some(95.0));
}

#[test]
fn max_severity_rejects_unknown_signs() {
    let registry = SignRegistry::standard().unwrap();
    let err = registry.max_severity(["coma", "inventé"]).unwrap_err();
    assert!(matches!(err, CoreError::UnknownSign(id) if id == "inventé"));
}

#[test]
fn max_severity_of_no_signs_is_none() {
    let registry = SignRegistry::standard().unwrap();
    assert_eq!(registry.max_severity(std::iter::empty::<&str>()).unwrap(), None);
}
