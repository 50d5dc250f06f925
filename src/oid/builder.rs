use crate::{
    error::{InvalidArgument, Result},
    Oid,
};

/// Builds an [`Oid`] either from an existing handle (shallow, ownership moves) or from raw elements (deep copy).
///
/// Giving both, or neither, is rejected with [`InvalidArgument`].
#[derive(Default)]
pub struct OidBuilder<'a> {
    source: Option<Oid<'a>>,
    elements: Option<&'a [u8]>,
}
impl<'a> OidBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn copy_of(self, source: Oid<'a>) -> Self {
        Self {
            source: Some(source),
            ..self
        }
    }
    pub fn elements(self, raw: &'a [u8]) -> Self {
        Self {
            elements: Some(raw),
            ..self
        }
    }
    pub fn build(self) -> Result<Oid<'a>> {
        match (self.source, self.elements) {
            (Some(_), Some(_)) => Err(InvalidArgument::ConflictingSources.into()),
            (Some(source), None) => Ok(source.shallow_copy()),
            (None, Some(raw)) => Oid::from_bytes(raw),
            (None, None) => Err(InvalidArgument::MissingSource.into()),
        }
    }
}
