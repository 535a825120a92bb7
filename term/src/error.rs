use crate::{InvalidBnodeId, InvalidIri, InvalidLanguageTag, InvalidTriple, InvalidVarName};
use thiserror::Error;

/// Any error raised while building terms, triples or patterns.
#[derive(Clone, Debug, Error)]
pub enum TermError {
    /// See [`InvalidIri`]
    #[error(transparent)]
    Iri(#[from] InvalidIri),
    /// See [`InvalidBnodeId`]
    #[error(transparent)]
    BnodeId(#[from] InvalidBnodeId),
    /// See [`InvalidLanguageTag`]
    #[error(transparent)]
    LanguageTag(#[from] InvalidLanguageTag),
    /// See [`InvalidVarName`]
    #[error(transparent)]
    VarName(#[from] InvalidVarName),
    /// See [`InvalidTriple`]
    #[error(transparent)]
    Triple(#[from] InvalidTriple),
}
