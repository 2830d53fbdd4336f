//! Filtrage par contraintes et construction de codes ADN
//!
//! Pipeline fixe: reverse → reverse_complement → gc_content. Chaque étape
//! prend le code produit par la précédente; une contrainte absente est une
//! étape identité.

use crate::encoder::encode;
use crate::enumerate::enumerate_vectors;
use crate::error::{DnaCodeError, Result};
use crate::log_operation;
use crate::metrics::{gc_weight, minimum_distance, Distance, GcWeightEnumerator};
use crate::transform::SymbolTransform;
use crate::vector::{BinaryVector, Code, GeneratorMatrix};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Contrainte structurelle d'un code ADN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Aucun mot égal à son inverse, un seul représentant par paire {w, reverse(w)}
    Reverse,
    /// Même règle pour le complément inverse
    ReverseComplement,
    /// Poids GC fixé
    GcContent,
}

impl Constraint {
    pub const ALL: [Constraint; 3] = [
        Constraint::Reverse,
        Constraint::ReverseComplement,
        Constraint::GcContent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Constraint::Reverse => "reverse",
            Constraint::ReverseComplement => "reverse_complement",
            Constraint::GcContent => "gc_content",
        }
    }
}

impl FromStr for Constraint {
    type Err = DnaCodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "reverse" => Ok(Constraint::Reverse),
            "reverse_complement" => Ok(Constraint::ReverseComplement),
            "gc_content" => Ok(Constraint::GcContent),
            other => Err(DnaCodeError::InvalidValue(format!(
                "contrainte inconnue '{}': attendu reverse, reverse_complement ou gc_content",
                other
            ))),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ensemble de contraintes demandées (l'ordre de saisie est indifférent)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    pub reverse: bool,
    pub reverse_complement: bool,
    pub gc_content: bool,
}

impl ConstraintSet {
    /// Aucune contrainte: le code linéaire est retourné tel quel
    pub fn none() -> Self {
        Self::default()
    }

    /// Les trois contraintes
    pub fn all() -> Self {
        Constraint::ALL.into_iter().collect()
    }

    /// Analyse une liste de noms de contraintes
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        names
            .iter()
            .map(|name| name.as_ref().parse::<Constraint>())
            .collect()
    }

    pub fn insert(&mut self, constraint: Constraint) {
        match constraint {
            Constraint::Reverse => self.reverse = true,
            Constraint::ReverseComplement => self.reverse_complement = true,
            Constraint::GcContent => self.gc_content = true,
        }
    }

    pub fn contains(&self, constraint: Constraint) -> bool {
        match constraint {
            Constraint::Reverse => self.reverse,
            Constraint::ReverseComplement => self.reverse_complement,
            Constraint::GcContent => self.gc_content,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.reverse || self.reverse_complement || self.gc_content)
    }

    /// Contraintes présentes, dans l'ordre d'application
    pub fn iter(&self) -> impl Iterator<Item = Constraint> + '_ {
        Constraint::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        let mut set = ConstraintSet::none();
        for constraint in iter {
            set.insert(constraint);
        }
        set
    }
}

/// Garde un représentant par orbite {w, T(w)} et retire les points fixes
///
/// Parcours dans l'ordre des lignes: un mot égal à T(w) est éliminé; sinon il
/// est gardé si T(w) n'a pas déjà été retenu. Le premier rencontré gagne.
pub fn orbit_filter(code: &Code, transform: SymbolTransform) -> Result<Code> {
    let images = transform.apply_all(code)?;
    let mut kept: HashSet<&BinaryVector> = HashSet::with_capacity(code.len());
    let mut output = Vec::new();

    for (word, image) in code.iter().zip(images.iter()) {
        if word == image {
            continue;
        }
        if !kept.contains(image) {
            kept.insert(word);
            output.push(word.clone());
        }
    }

    tracing::debug!(
        transform = %transform,
        input = code.len(),
        output = output.len(),
        "filtrage par orbites"
    );
    Ok(Code::from_vectors_unchecked(output, code.width()))
}

/// Retire les mots auto-inverses et les paires inverses redondantes
pub fn reverse_constraint(code: &Code) -> Result<Code> {
    orbit_filter(code, SymbolTransform::Reverse)
}

/// Retire les mots auto-complémentaires-inverses et les paires redondantes
pub fn reverse_complement_constraint(code: &Code) -> Result<Code> {
    orbit_filter(code, SymbolTransform::ReverseComplement)
}

/// Ne garde que les mots de poids GC `target`
pub fn gc_content_constraint(code: &Code, target: usize) -> Result<Code> {
    code.ensure_even()?;
    let mut output = Vec::new();
    for word in code {
        if gc_weight(word)? == target {
            output.push(word.clone());
        }
    }

    tracing::debug!(gc_target = target, input = code.len(), output = output.len(), "filtrage GC");
    Ok(Code::from_vectors_unchecked(output, code.width()))
}

/// Filtre un code selon un ensemble de contraintes
#[derive(Debug, Clone, Copy)]
pub struct ConstraintFilter {
    constraints: ConstraintSet,
    gc_target: Option<usize>,
}

impl ConstraintFilter {
    /// Crée un filtre; `gc_content` exige un poids GC cible
    pub fn new(constraints: ConstraintSet, gc_target: Option<usize>) -> Result<Self> {
        if constraints.gc_content && gc_target.is_none() {
            return Err(DnaCodeError::InvalidValue(
                "la contrainte 'gc_content' requiert un poids GC cible".to_string(),
            ));
        }
        Ok(Self {
            constraints,
            gc_target,
        })
    }

    pub fn constraints(&self) -> ConstraintSet {
        self.constraints
    }

    pub fn gc_target(&self) -> Option<usize> {
        self.gc_target
    }

    /// Applique les étapes demandées et retourne le code après chacune
    pub fn apply_stages(&self, code: Code) -> Result<Vec<(Constraint, Code)>> {
        if !self.constraints.is_empty() {
            code.ensure_even()?;
        }

        let mut stages = Vec::new();
        let mut current = code;
        for constraint in self.constraints.iter() {
            current = match constraint {
                Constraint::Reverse => reverse_constraint(&current)?,
                Constraint::ReverseComplement => reverse_complement_constraint(&current)?,
                Constraint::GcContent => {
                    let target = self.gc_target.ok_or_else(|| {
                        DnaCodeError::InvalidValue(
                            "la contrainte 'gc_content' requiert un poids GC cible".to_string(),
                        )
                    })?;
                    gc_content_constraint(&current, target)?
                }
            };
            stages.push((constraint, current.clone()));
        }
        Ok(stages)
    }

    /// Applique les étapes demandées et retourne le code final
    pub fn apply(&self, code: Code) -> Result<Code> {
        Ok(self
            .apply_stages(code.clone())?
            .pop()
            .map_or(code, |(_, last)| last))
    }
}

/// Code linéaire complet engendré par une matrice génératrice
pub fn linear_code(generator: &GeneratorMatrix) -> Result<Code> {
    let messages = enumerate_vectors(generator.dimension());
    encode(&messages, generator)
}

/// Construit un code ADN à partir d'une matrice génératrice
///
/// Sans contrainte, retourne le code linéaire complet.
pub fn build_dna_code(
    generator: &GeneratorMatrix,
    constraints: ConstraintSet,
    gc_target: Option<usize>,
) -> Result<Code> {
    Ok(build_with_report(generator, constraints, gc_target)?.code)
}

/// Variante de `build_dna_code` acceptant des noms de contraintes
pub fn build_dna_code_from_names<S: AsRef<str>>(
    generator: &GeneratorMatrix,
    names: &[S],
    gc_target: Option<usize>,
) -> Result<Code> {
    build_dna_code(generator, ConstraintSet::parse(names)?, gc_target)
}

/// Taille du code après une étape de construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub stage: String,
    pub size: usize,
}

/// Résultat détaillé d'une construction
#[derive(Debug, Clone, Serialize)]
pub struct ConstructionReport {
    pub dimension: usize,
    pub length: usize,
    pub stages: Vec<StageSummary>,
    pub minimum_distance: Distance,
    pub gc_enumerator: Option<String>,
    pub code: Code,
}

/// Construit le code et collecte les tailles intermédiaires
pub fn build_with_report(
    generator: &GeneratorMatrix,
    constraints: ConstraintSet,
    gc_target: Option<usize>,
) -> Result<ConstructionReport> {
    let filter = ConstraintFilter::new(constraints, gc_target)?;
    if !constraints.is_empty() && generator.length() % 2 != 0 {
        return Err(DnaCodeError::InvalidValue(format!(
            "longueur impaire ({}): les mots de code ADN doivent avoir une longueur paire",
            generator.length()
        )));
    }

    log_operation!("build_dna_code", {
        tracing::info!(
            k = generator.dimension(),
            n = generator.length(),
            "construction du code linéaire"
        );
        let code = linear_code(generator)?;

        let mut stages = vec![StageSummary {
            stage: "linear".to_string(),
            size: code.len(),
        }];
        let staged = filter.apply_stages(code.clone())?;
        stages.extend(staged.iter().map(|(constraint, c)| StageSummary {
            stage: constraint.to_string(),
            size: c.len(),
        }));
        let code = staged.into_iter().last().map_or(code, |(_, last)| last);

        let gc_enumerator = if code.width() % 2 == 0 {
            Some(GcWeightEnumerator::from_code(&code)?.to_string())
        } else {
            None
        };

        tracing::info!(size = code.len(), "code ADN construit");
        Ok(ConstructionReport {
            dimension: generator.dimension(),
            length: generator.length(),
            stages,
            minimum_distance: minimum_distance(&code),
            gc_enumerator,
            code,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{reverse, reverse_complement};

    fn generator() -> GeneratorMatrix {
        GeneratorMatrix::new(vec![vec![1, 0, 1, 1], vec![0, 1, 1, 0]]).unwrap()
    }

    fn generator_6() -> GeneratorMatrix {
        GeneratorMatrix::new(vec![
            vec![1, 0, 0, 0, 1, 1],
            vec![0, 1, 0, 1, 0, 1],
            vec![0, 0, 1, 1, 1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_constraint_parsing() {
        let set = ConstraintSet::parse(&["gc_content", "reverse"]).unwrap();
        assert!(set.reverse && set.gc_content && !set.reverse_complement);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Constraint::Reverse, Constraint::GcContent]
        );
        assert!(ConstraintSet::parse(&["palindrome"]).unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_gc_content_requires_target() {
        let err = build_dna_code(&generator(), ConstraintSet::all(), None).unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn test_no_constraints_returns_linear_code() {
        let code = build_dna_code(&generator(), ConstraintSet::none(), None).unwrap();
        assert_eq!(code, linear_code(&generator()).unwrap());
        assert_eq!(code.len(), 4);
    }

    #[test]
    fn test_reverse_constraint_on_example() {
        // 0000 est auto-inverse; les inverses des trois autres sont hors du code
        let code = build_dna_code(
            &generator(),
            [Constraint::Reverse].into_iter().collect(),
            None,
        )
        .unwrap();
        assert_eq!(
            code,
            Code::from_rows(vec![vec![0, 1, 1, 0], vec![1, 0, 1, 1], vec![1, 1, 0, 1]]).unwrap()
        );
    }

    #[test]
    fn test_orbit_filter_keeps_first_representative() {
        let code = Code::from_rows(vec![
            vec![0, 0, 1, 1],
            vec![1, 1, 0, 0],
            vec![0, 1, 0, 1],
            vec![0, 0, 0, 1],
            vec![0, 1, 0, 0],
        ])
        .unwrap();
        let filtered = reverse_constraint(&code).unwrap();
        assert_eq!(
            filtered,
            Code::from_rows(vec![vec![0, 0, 1, 1], vec![0, 0, 0, 1]]).unwrap()
        );
    }

    #[test]
    fn test_reverse_complement_constraint() {
        let code = Code::from_rows(vec![
            vec![0, 0, 1, 1],
            vec![0, 0, 0, 1],
            vec![1, 0, 1, 1],
            vec![0, 1, 0, 1],
        ])
        .unwrap();
        // 0011 (AT) est son propre complément inverse; 0001 (AC) ↔ 1011 (GT)
        let filtered = reverse_complement_constraint(&code).unwrap();
        assert_eq!(
            filtered,
            Code::from_rows(vec![vec![0, 0, 0, 1], vec![0, 1, 0, 1]]).unwrap()
        );
    }

    #[test]
    fn test_gc_content_constraint() {
        let code = linear_code(&generator()).unwrap();
        let filtered = gc_content_constraint(&code, 1).unwrap();
        assert_eq!(
            filtered,
            Code::from_rows(vec![vec![1, 0, 1, 1], vec![1, 1, 0, 1]]).unwrap()
        );
    }

    #[test]
    fn test_full_pipeline_invariants() {
        let code = build_dna_code(&generator_6(), ConstraintSet::all(), Some(2)).unwrap();
        let set: HashSet<_> = code.iter().cloned().collect();
        assert_eq!(set.len(), code.len());
        for word in &code {
            let r = reverse(word).unwrap();
            let rc = reverse_complement(word).unwrap();
            assert_ne!(word, &r);
            assert_ne!(word, &rc);
            assert!(!set.contains(&rc));
            assert_eq!(gc_weight(word).unwrap(), 2);
        }
    }

    #[test]
    fn test_stages_are_composed_in_fixed_order() {
        let g = generator_6();
        let listed = build_dna_code_from_names(&g, &["gc_content", "reverse_complement", "reverse"], Some(1))
            .unwrap();
        let manual = {
            let step = reverse_constraint(&linear_code(&g).unwrap()).unwrap();
            let step = reverse_complement_constraint(&step).unwrap();
            gc_content_constraint(&step, 1).unwrap()
        };
        assert_eq!(listed, manual);
    }

    #[test]
    fn test_filter_on_existing_code() {
        let filter = ConstraintFilter::new(ConstraintSet::none(), Some(3)).unwrap();
        let code = linear_code(&generator()).unwrap();
        assert_eq!(filter.apply(code.clone()).unwrap(), code);
        assert_eq!(filter.gc_target(), Some(3));

        let filter = ConstraintFilter::new([Constraint::GcContent].into_iter().collect(), Some(2)).unwrap();
        assert!(filter.constraints().gc_content);
        assert_eq!(
            filter.apply(code).unwrap(),
            Code::from_rows(vec![vec![0, 1, 1, 0]]).unwrap()
        );
    }

    #[test]
    fn test_odd_length_rejected_with_constraints() {
        let g = GeneratorMatrix::new(vec![vec![1, 0, 1]]).unwrap();
        assert!(build_dna_code(&g, ConstraintSet::all(), Some(1))
            .unwrap_err()
            .is_invalid_value());
        assert_eq!(build_dna_code(&g, ConstraintSet::none(), None).unwrap().len(), 2);
    }

    #[test]
    fn test_report() {
        let report = build_with_report(
            &generator(),
            [Constraint::Reverse].into_iter().collect(),
            None,
        )
        .unwrap();
        assert_eq!(report.stages.len(), 2);
        assert_eq!(report.stages[0].size, 4);
        assert_eq!(report.stages[1].size, 3);
        assert_eq!(report.stages[1].stage, "reverse");
        assert_eq!(report.minimum_distance, Distance::Finite(2));
        assert_eq!(report.gc_enumerator.as_deref(), Some("a^0 b^2 + 2a^1 b^1"));
    }
}
