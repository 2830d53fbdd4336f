//! Vecteurs binaires, codes et matrices génératrices

use crate::error::{DnaCodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nucléotide représenté par un symbole de 2 bits
///
/// Convention: 00 → A, 01 → C, 10 → G, 11 → T. Les paires de bits égaux
/// codent A/T, les paires différentes codent C/G, et le complément bit à bit
/// réalise l'appariement de Watson–Crick (A↔T, C↔G).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Décode un symbole de deux bits
    pub fn from_bits(high: u8, low: u8) -> Self {
        match (high, low) {
            (0, 0) => Nucleotide::A,
            (0, _) => Nucleotide::C,
            (_, 0) => Nucleotide::G,
            _ => Nucleotide::T,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Retourne true si c'est une base GC
    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::C | Nucleotide::G)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Vecteur binaire de longueur fixe (chaque élément vaut 0 ou 1)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct BinaryVector(Vec<u8>);

impl BinaryVector {
    /// Crée un vecteur en vérifiant que chaque élément est binaire
    pub fn new(bits: Vec<u8>) -> Result<Self> {
        if let Some((pos, bit)) = bits.iter().enumerate().find(|&(_, &b)| b > 1) {
            return Err(DnaCodeError::InvalidValue(format!(
                "élément {} non binaire à la position {}",
                bit, pos
            )));
        }
        Ok(Self(bits))
    }

    /// Vecteur nul de longueur donnée
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }

    /// Construction interne à partir de bits déjà validés
    pub(crate) fn from_bits_unchecked(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bits(self) -> Vec<u8> {
        self.0
    }

    /// Vérifie que la longueur est paire (lecture en symboles de 2 bits)
    pub fn ensure_even(&self) -> Result<()> {
        if self.0.len() % 2 != 0 {
            return Err(DnaCodeError::InvalidValue(format!(
                "longueur impaire ({}): un mot de code ADN doit avoir une longueur paire",
                self.0.len()
            )));
        }
        Ok(())
    }

    /// Symboles de 2 bits du vecteur, dans l'ordre de lecture
    pub fn symbols(&self) -> Result<impl Iterator<Item = [u8; 2]> + '_> {
        self.ensure_even()?;
        Ok(self.0.chunks_exact(2).map(|pair| [pair[0], pair[1]]))
    }

    /// Séquence de nucléotides représentée par le vecteur
    pub fn to_nucleotides(&self) -> Result<Vec<Nucleotide>> {
        Ok(self
            .symbols()?
            .map(|[high, low]| Nucleotide::from_bits(high, low))
            .collect())
    }

    /// Rendu du vecteur sous forme de brin ADN
    pub fn to_dna_string(&self) -> Result<String> {
        Ok(self.to_nucleotides()?.iter().map(|n| n.as_char()).collect())
    }

    /// Somme bit à bit modulo 2
    pub fn xor(&self, other: &BinaryVector) -> Result<BinaryVector> {
        if self.len() != other.len() {
            return Err(DnaCodeError::shape("xor de vecteurs", self.len(), other.len()));
        }
        Ok(Self(self.0.iter().zip(&other.0).map(|(a, b)| a ^ b).collect()))
    }
}

impl TryFrom<Vec<u8>> for BinaryVector {
    type Error = DnaCodeError;

    fn try_from(bits: Vec<u8>) -> Result<Self> {
        BinaryVector::new(bits)
    }
}

impl From<BinaryVector> for Vec<u8> {
    fn from(vector: BinaryVector) -> Self {
        vector.0
    }
}

impl fmt::Display for BinaryVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Collection ordonnée de vecteurs binaires de même longueur
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<BinaryVector>", into = "Vec<BinaryVector>")]
pub struct Code {
    rows: Vec<BinaryVector>,
    width: usize,
}

impl Code {
    /// Crée un code en vérifiant que toutes les lignes ont la même longueur
    pub fn new(rows: Vec<BinaryVector>) -> Result<Self> {
        let width = rows.first().map_or(0, BinaryVector::len);
        if let Some(row) = rows.iter().find(|r| r.len() != width) {
            return Err(DnaCodeError::shape(
                "longueur des mots de code",
                width,
                row.len(),
            ));
        }
        Ok(Self { rows, width })
    }

    /// Crée un code depuis des lignes brutes (valide binaire et rectangulaire)
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .map(BinaryVector::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(rows)
    }

    /// Construction interne: lignes de largeur `width` déjà garanties
    pub(crate) fn from_vectors_unchecked(rows: Vec<BinaryVector>, width: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == width));
        Self { rows, width }
    }

    /// Code vide dont les mots auraient la longueur `width`
    pub fn empty(width: usize) -> Self {
        Self {
            rows: Vec::new(),
            width,
        }
    }

    /// Nombre de mots de code
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Longueur commune des mots de code
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[BinaryVector] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BinaryVector> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<BinaryVector> {
        self.rows
    }

    /// Vérifie que la longueur des mots est paire
    pub fn ensure_even(&self) -> Result<()> {
        if self.width % 2 != 0 {
            return Err(DnaCodeError::InvalidValue(format!(
                "longueur impaire ({}): les mots de code ADN doivent avoir une longueur paire",
                self.width
            )));
        }
        Ok(())
    }
}

impl TryFrom<Vec<BinaryVector>> for Code {
    type Error = DnaCodeError;

    fn try_from(rows: Vec<BinaryVector>) -> Result<Self> {
        Code::new(rows)
    }
}

impl From<Code> for Vec<BinaryVector> {
    fn from(code: Code) -> Self {
        code.rows
    }
}

impl<'a> IntoIterator for &'a Code {
    type Item = &'a BinaryVector;
    type IntoIter = std::slice::Iter<'a, BinaryVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Matrice génératrice k×n d'un code linéaire sur GF(2)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BinaryVector>", into = "Vec<BinaryVector>")]
pub struct GeneratorMatrix(Code);

impl GeneratorMatrix {
    /// Crée une matrice génératrice (lignes binaires de même longueur)
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self> {
        Code::from_rows(rows).map(Self)
    }

    /// Dimension k (nombre de lignes)
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Longueur n des mots de code
    pub fn length(&self) -> usize {
        self.0.width()
    }

    pub fn rows(&self) -> &[BinaryVector] {
        self.0.rows()
    }

    /// Vue de la matrice comme collection de lignes
    pub fn as_code(&self) -> &Code {
        &self.0
    }
}

impl TryFrom<Vec<BinaryVector>> for GeneratorMatrix {
    type Error = DnaCodeError;

    fn try_from(rows: Vec<BinaryVector>) -> Result<Self> {
        Code::new(rows).map(Self)
    }
}

impl From<GeneratorMatrix> for Vec<BinaryVector> {
    fn from(matrix: GeneratorMatrix) -> Self {
        matrix.0.into_rows()
    }
}
