//! Clinical sign registry.
//!
//! Static severity tables derived from ERC 2021, SFAR 2024, and the French
//! pre-hospital triage algorithms, one table per physiological system. The
//! tables are merged into a single id-keyed registry at startup; the merge
//! fails fast if two systems ever declare the same identifier, so a new
//! table entry can never silently shadow an existing one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Physiological system a clinical sign belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySystem {
    Cardiovascular,
    Respiratory,
    Neurological,
    Digestive,
    General,
}

impl BodySystem {
    /// All systems, in the order they appear in the rendered guidelines.
    pub const ALL: [BodySystem; 5] = [
        BodySystem::Cardiovascular,
        BodySystem::Respiratory,
        BodySystem::Neurological,
        BodySystem::Digestive,
        BodySystem::General,
    ];

    /// Heading used in the rendered guidelines.
    pub fn heading(&self) -> &'static str {
        match self {
            BodySystem::Cardiovascular => "CARDIOVASCULAR SYSTEM",
            BodySystem::Respiratory => "RESPIRATORY SYSTEM",
            BodySystem::Neurological => "NEUROLOGICAL SYSTEM",
            BodySystem::Digestive => "DIGESTIVE SYSTEM",
            BodySystem::General => "GENERAL SIGNS",
        }
    }
}

/// A named clinical finding with its severity weight.
///
/// Identifiers are the French clinical terms of the source triage tables;
/// weights are on a 0–100 scale. The rationale is the short criterion shown
/// next to the sign in the rendered guidelines.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SignDefinition {
    pub id: &'static str,
    pub weight: f64,
    pub system: BodySystem,
    pub rationale: &'static str,
}

const fn sign(
    id: &'static str,
    weight: f64,
    system: BodySystem,
    rationale: &'static str,
) -> SignDefinition {
    SignDefinition {
        id,
        weight,
        system,
        rationale,
    }
}

const CARDIOVASCULAR_SIGNS: &[SignDefinition] = &[
    sign("arrêt_cardiaque", 100.0, BodySystem::Cardiovascular, "cardiac arrest, immediate CPR"),
    sign("choc_cardiogénique", 95.0, BodySystem::Cardiovascular, "systolic BP < 60-70 mmHg, mottling, oliguria"),
    sign("tachycardie_extrême", 90.0, BodySystem::Cardiovascular, ">220/min infant, >180/min adult"),
    sign("bradycardie_sévère", 85.0, BodySystem::Cardiovascular, "<60/min with low-output signs"),
    sign("œdème_poumon_aigu", 85.0, BodySystem::Cardiovascular, "acute pulmonary edema"),
    sign("cyanose_centrale", 80.0, BodySystem::Cardiovascular, "SaO2 < 85%"),
    sign("pouls_filants", 75.0, BodySystem::Cardiovascular, "thready pulse, compensated shock"),
    sign("douleur_thoracique_dyspnée", 70.0, BodySystem::Cardiovascular, "chest pain with dyspnea, suspected ischemia"),
    sign("hypertension_sévère", 65.0, BodySystem::Cardiovascular, "BP > 99th percentile with neurological signs"),
    sign("souffle_cardiaque_pathologique", 60.0, BodySystem::Cardiovascular, "pathological heart murmur"),
];

const RESPIRATORY_SIGNS: &[SignDefinition] = &[
    sign("apnée", 95.0, BodySystem::Respiratory, "pause > 20 s"),
    sign("détresse_respiratoire_sévère", 90.0, BodySystem::Respiratory, "Silverman > 8, SaO2 < 90%"),
    sign("tirage_intercostal", 85.0, BodySystem::Respiratory, "intercostal or subcostal retractions"),
    sign("cyanose", 80.0, BodySystem::Respiratory, "peripheral cyanosis"),
    sign("expectoration_sanglante", 80.0, BodySystem::Respiratory, "hemoptysis"),
    sign("stridor_inspiratoire", 75.0, BodySystem::Respiratory, "possible epiglottitis"),
    sign("toux_coqueluchoïde", 70.0, BodySystem::Respiratory, "pertussis-like cough"),
    sign("wheezing_diffus", 65.0, BodySystem::Respiratory, "severe asthma"),
    sign("fréquence_respiratoire_élevée", 60.0, BodySystem::Respiratory, ">70/min infant, >30/min adult"),
];

const NEUROLOGICAL_SIGNS: &[SignDefinition] = &[
    sign("coma", 100.0, BodySystem::Neurological, "Glasgow < 8"),
    sign("convulsions_prolongées", 95.0, BodySystem::Neurological, "seizure > 5 min"),
    sign("raideur_nuque", 90.0, BodySystem::Neurological, "possible meningitis"),
    sign("déficit_moteur_brutal", 85.0, BodySystem::Neurological, "sudden motor deficit, stroke or trauma"),
    sign("céphalées_vomissements_jet", 80.0, BodySystem::Neurological, "headache with projectile vomiting, raised ICP"),
    sign("troubles_conscience", 75.0, BodySystem::Neurological, "altered consciousness"),
    sign("mouvements_anormaux", 70.0, BodySystem::Neurological, "abnormal movements"),
];

const DIGESTIVE_SIGNS: &[SignDefinition] = &[
    sign("hémorragie_digestive_haute", 90.0, BodySystem::Digestive, "upper GI bleeding"),
    sign("occlusion_intestinale", 85.0, BodySystem::Digestive, "bowel obstruction"),
    sign("péritonite", 80.0, BodySystem::Digestive, "peritonitis"),
    sign("déshydratation_sévère", 75.0, BodySystem::Digestive, "severe dehydration"),
    sign("diarrhée_sanglante", 70.0, BodySystem::Digestive, "bloody diarrhea"),
];

const GENERAL_SIGNS: &[SignDefinition] = &[
    sign("refus_boire_alimentaire", 90.0, BodySystem::General, "refusal to drink or feed, especially in infants"),
    sign("signes_choc", 90.0, BodySystem::General, "signs of shock"),
    sign("marbrures", 85.0, BodySystem::General, "skin mottling"),
    sign("fièvre_élevée", 80.0, BodySystem::General, ">39°C with other signs"),
    sign("oligurie", 80.0, BodySystem::General, "oliguria"),
    sign("hypothermie", 75.0, BodySystem::General, "<35°C"),
    sign("altération_état_général", 70.0, BodySystem::General, "deteriorated general condition"),
];

fn table_for(system: BodySystem) -> &'static [SignDefinition] {
    match system {
        BodySystem::Cardiovascular => CARDIOVASCULAR_SIGNS,
        BodySystem::Respiratory => RESPIRATORY_SIGNS,
        BodySystem::Neurological => NEUROLOGICAL_SIGNS,
        BodySystem::Digestive => DIGESTIVE_SIGNS,
        BodySystem::General => GENERAL_SIGNS,
    }
}

/// Merged, read-only lookup over all per-system sign tables.
///
/// Built once at process start and passed by reference to consumers.
/// There is no mutation API after construction.
#[derive(Debug)]
pub struct SignRegistry {
    by_id: HashMap<&'static str, SignDefinition>,
    by_system: HashMap<BodySystem, Vec<SignDefinition>>,
}

impl SignRegistry {
    /// Build the standard registry from the five per-system tables.
    ///
    /// Fails with [`CoreError::DuplicateSign`] if an identifier appears in
    /// more than one table.
    pub fn standard() -> Result<SignRegistry, CoreError> {
        Self::from_tables(BodySystem::ALL.iter().map(|s| table_for(*s)))
    }

    fn from_tables<'a, I>(tables: I) -> Result<SignRegistry, CoreError>
    where
        I: IntoIterator<Item = &'a [SignDefinition]>,
    {
        let mut by_id = HashMap::new();
        let mut by_system: HashMap<BodySystem, Vec<SignDefinition>> = HashMap::new();
        for table in tables {
            for def in table {
                if by_id.insert(def.id, *def).is_some() {
                    return Err(CoreError::DuplicateSign(def.id.to_string()));
                }
                by_system.entry(def.system).or_default().push(*def);
            }
        }
        Ok(SignRegistry { by_id, by_system })
    }

    /// Look up a sign by identifier.
    ///
    /// Unknown identifiers return `None`; callers must not treat an unknown
    /// sign as zero severity.
    pub fn lookup(&self, id: &str) -> Option<&SignDefinition> {
        self.by_id.get(id)
    }

    /// All signs for one physiological system, in table order. Answered
    /// from the merged contents, so it cannot diverge from what `lookup`
    /// knows about.
    pub fn signs_for_system(&self, system: BodySystem) -> &[SignDefinition] {
        self.by_system
            .get(&system)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of registered signs.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Severity magnitude for a set of identified signs: the maximum weight,
    /// not the average — clinical risk is driven by the worst finding.
    ///
    /// Returns `Ok(None)` for an empty set and [`CoreError::UnknownSign`]
    /// if any identifier is not in the registry.
    pub fn max_severity<'a, I>(&self, ids: I) -> Result<Option<f64>, CoreError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut max: Option<f64> = None;
        for id in ids {
            let def = self
                .lookup(id)
                .ok_or_else(|| CoreError::UnknownSign(id.to_string()))?;
            max = Some(match max {
                Some(m) if m >= def.weight => m,
                _ => def.weight,
            });
        }
        Ok(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_identifier_fails_construction() {
        const A: &[SignDefinition] =
            &[sign("coma", 100.0, BodySystem::Neurological, "Glasgow < 8")];
        const B: &[SignDefinition] =
            &[sign("coma", 70.0, BodySystem::General, "shadowing entry")];

        let err = SignRegistry::from_tables([A, B]).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateSign(id) if id == "coma"));
    }

    #[test]
    fn per_system_listing_reflects_the_merged_tables_only() {
        let registry = SignRegistry::from_tables([CARDIOVASCULAR_SIGNS]).unwrap();

        let cardio = registry.signs_for_system(BodySystem::Cardiovascular);
        assert_eq!(cardio.len(), CARDIOVASCULAR_SIGNS.len());
        assert_eq!(cardio[0].id, "arrêt_cardiaque");

        // Systems absent from the merge report no signs.
        assert!(registry.signs_for_system(BodySystem::Respiratory).is_empty());
    }
}
