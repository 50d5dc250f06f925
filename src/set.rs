use std::fmt::{Debug, Display};

use crate::{
    error::{Error, Result},
    Oid,
};

/// An insertion-ordered set of owned OIDs, the counterpart of a `gss_OID_set`.
///
/// Membership is byte equality, so adding an OID that is already present does nothing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OidSet {
    members: Vec<Oid<'static>>,
}
impl OidSet {
    pub fn new() -> Self {
        Self::default()
    }
    /// Adds `oid`, copying it if it is not owned already. Returns whether it was newly added.
    pub fn insert(&mut self, oid: Oid<'_>) -> Result<bool> {
        if self.contains(&oid) {
            return Ok(false);
        }
        self.members
            .try_reserve(1)
            .map_err(|_| Error::out_of_memory(std::mem::size_of::<Oid<'static>>()))?;
        self.members.push(oid.into_owned()?);
        Ok(true)
    }
    pub fn contains(&self, oid: &Oid<'_>) -> bool {
        self.members.iter().any(|member| member == oid)
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Oid<'static>> {
        self.members.iter()
    }
}
impl<'s> IntoIterator for &'s OidSet {
    type Item = &'s Oid<'static>;
    type IntoIter = std::slice::Iter<'s, Oid<'static>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl IntoIterator for OidSet {
    type Item = Oid<'static>;
    type IntoIter = std::vec::IntoIter<Oid<'static>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}
impl Extend<Oid<'static>> for OidSet {
    fn extend<T: IntoIterator<Item = Oid<'static>>>(&mut self, iter: T) {
        for oid in iter {
            if !self.contains(&oid) {
                self.members.push(oid);
            }
        }
    }
}
impl FromIterator<Oid<'static>> for OidSet {
    fn from_iter<T: IntoIterator<Item = Oid<'static>>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
impl Display for OidSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, oid) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{oid}")?;
        }
        f.write_str("}")
    }
}
impl Debug for OidSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
