use std::{
    borrow::Borrow,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ptr::NonNull,
    str::FromStr,
};

use crate::{
    ber::{self, Arcs},
    buffer::{copy_to_box, ForeignBuffer, Ownership, Storage},
    error::{InvalidArgument, Result},
};

mod builder;

pub use builder::OidBuilder;

/// A GSSAPI object identifier, held as its BER encoding.
///
/// The encoding is validated whenever an `Oid` is created, so every accessor works on well-formed bytes.
/// Equality and hashing are defined on the encoded bytes. There is intentionally no ordering.
pub struct Oid<'a> {
    storage: Storage<'a>,
}

impl Oid<'static> {
    /// Copies `raw` into a new allocation.
    ///
    /// ```
    /// let oid = gss_oid::Oid::from_bytes(&[0x2b, 0x06, 0x01, 0x05, 0x05, 0x02]).unwrap();
    /// assert_eq!(oid.dotted_form(), "1.3.6.1.5.5.2");
    /// ```
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        if raw.is_empty() {
            return Err(InvalidArgument::EmptyElements.into());
        }
        ber::validate(raw)?;
        Ok(Self {
            storage: Storage::Owned(copy_to_box(raw)?),
        })
    }
    /// Encodes an arc sequence. At least two arcs are required.
    pub fn from_arcs(arcs: impl IntoIterator<Item = u64>) -> Result<Self> {
        let arcs: Vec<u64> = arcs.into_iter().collect();
        let encoded = ber::encode_asn1ber(&arcs)?;
        Ok(Self {
            storage: Storage::Owned(encoded.into_boxed_slice()),
        })
    }
    /// Parses the dotted decimal form, e.g. `"1.2.840.113554.1.2.2"`.
    pub fn from_dotted(dotted: &str) -> Result<Self> {
        let arcs = dotted
            .split('.')
            .map(|component| {
                // u64::from_str accepts a leading '+', which is not part of the dotted form
                if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                component.parse::<u64>().ok()
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| InvalidArgument::InvalidComponent {
                input: dotted.to_owned(),
            })?;
        Self::from_arcs(arcs)
    }
    /// Wraps static, known-good content bytes without validating them
    pub(crate) const fn from_static(bytes: &'static [u8]) -> Self {
        Self {
            storage: Storage::Borrowed(bytes),
        }
    }
}

impl<'a> Oid<'a> {
    /// Borrows already encoded content bytes without copying them.
    pub fn from_slice(bytes: &'a [u8]) -> Result<Self> {
        ber::validate(bytes)?;
        Ok(Self {
            storage: Storage::Borrowed(bytes),
        })
    }
    /// Wraps a buffer handed out by the native library without copying it.
    ///
    /// With [`Ownership::Owned`] the buffer is released once the returned `Oid` is dropped.
    /// Ownership passes on the call, so an owned buffer that fails validation is released before the error is returned.
    ///
    /// # Safety
    /// `pointer` must be valid for reads of `length` bytes and must not be mutated for `'a`,
    /// or, with [`Ownership::Owned`], until the release function runs.
    /// An owned buffer must not be released by anyone else, and its release function must be callable from any thread.
    pub unsafe fn wrap_foreign(pointer: *const u8, length: usize, ownership: Ownership) -> Result<Self> {
        let Some(pointer) = NonNull::new(pointer.cast_mut()) else {
            return Err(InvalidArgument::NullPointer.into());
        };
        let storage = match ownership {
            Ownership::Borrowed => Storage::Borrowed(unsafe { std::slice::from_raw_parts(pointer.as_ptr(), length) }),
            Ownership::Owned(release) => Storage::Foreign(unsafe { ForeignBuffer::new(pointer, length, release) }),
        };
        if length == 0 {
            return Err(InvalidArgument::EmptyElements.into());
        }
        ber::validate(storage.as_slice())?;
        Ok(Self { storage })
    }
    /// Hands the buffer to a new handle. The source is consumed, so ownership can never be duplicated.
    #[must_use]
    pub fn shallow_copy(self) -> Self {
        Self { storage: self.storage }
    }
    /// A non-owning handle to the same buffer. Dropping it never releases anything.
    pub fn alias(&self) -> Oid<'_> {
        Oid {
            storage: Storage::Borrowed(self.as_bytes()),
        }
    }
    /// Deep copies the encoding into a new allocation.
    pub fn to_owned_oid(&self) -> Result<Oid<'static>> {
        Ok(Oid {
            storage: Storage::Owned(copy_to_box(self.as_bytes())?),
        })
    }
    /// Like [`to_owned_oid`](Self::to_owned_oid), but reuses an existing allocation
    pub fn into_owned(self) -> Result<Oid<'static>> {
        match self.storage {
            Storage::Owned(boxed) => Ok(Oid {
                storage: Storage::Owned(boxed),
            }),
            _ => self.to_owned_oid(),
        }
    }
    /// Parses a DER encoded OBJECT IDENTIFIER (tag, length and contents), borrowing the contents.
    pub fn from_der(der: &'a [u8]) -> Result<Self> {
        Self::from_slice(ber::read_der(der)?)
    }
    pub fn to_der(&self) -> Result<Vec<u8>> {
        ber::write_der(self.as_bytes())
    }

    /// The BER encoded content bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_slice()
    }
    /// Raw view for outbound native calls. Valid as long as `self` is.
    pub fn as_ptr(&self) -> *const u8 {
        self.as_bytes().as_ptr()
    }
    /// Byte length of the encoding. An OID is never empty.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }
    /// Whether dropping this handle frees memory
    pub fn is_owning(&self) -> bool {
        self.storage.is_owning()
    }
    pub fn arcs(&self) -> Arcs<'_> {
        Arcs::new(self.as_bytes())
    }
    /// Dotted decimal form, e.g. `"1.2.840.113554.1.2.2"`
    pub fn dotted_form(&self) -> String {
        self.to_string()
    }
    /// Whether `prefix` names an ancestor of (or the same node as) `self`.
    pub fn starts_with(&self, prefix: &Oid<'_>) -> bool {
        // every valid encoding ends on a subidentifier boundary, so a byte prefix is an arc prefix
        self.as_bytes().starts_with(prefix.as_bytes())
    }
}

impl Clone for Oid<'_> {
    /// Borrowed handles are copied as borrows. Anything owning is deep copied, so a clone never shares ownership.
    fn clone(&self) -> Self {
        let storage = match &self.storage {
            Storage::Borrowed(slice) => Storage::Borrowed(*slice),
            owning => Storage::Owned(Box::from(owning.as_slice())),
        };
        Self { storage }
    }
}

impl<'b> PartialEq<Oid<'b>> for Oid<'_> {
    fn eq(&self, other: &Oid<'b>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
impl Eq for Oid<'_> {}
impl Hash for Oid<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}
impl Borrow<[u8]> for Oid<'_> {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}
impl AsRef<[u8]> for Oid<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Display for Oid<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, arc) in self.arcs().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{arc}")?;
        }
        Ok(())
    }
}
impl Debug for Oid<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Oid({self})")
    }
}

impl FromStr for Oid<'static> {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_dotted(s)
    }
}
impl TryFrom<&[u64]> for Oid<'static> {
    type Error = crate::Error;

    fn try_from(arcs: &[u64]) -> Result<Self> {
        Self::from_arcs(arcs.iter().copied())
    }
}
impl<const N: usize> TryFrom<[u64; N]> for Oid<'static> {
    type Error = crate::Error;

    fn try_from(arcs: [u64; N]) -> Result<Self> {
        Self::from_arcs(arcs)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Oid<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Oid<'static> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let dotted = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::from_dotted(&dotted).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::{Error, MalformedKind};

    const KRB5: [u8; 9] = [0x2a, 0x86, 0x48, 0x86, 0xf7, 0x12, 0x01, 0x02, 0x02];

    #[test]
    fn dotted_form_is_stable() {
        let oid = Oid::from_dotted("1.2.840.113554.1.2.2").unwrap();
        assert_eq!(oid.as_bytes(), KRB5);
        assert_eq!(oid.dotted_form(), "1.2.840.113554.1.2.2");
        assert_eq!(format!("{oid:?}"), "Oid(1.2.840.113554.1.2.2)");
    }

    #[test]
    fn rejects_single_arc() {
        assert_eq!(
            Oid::from_arcs([5]).unwrap_err(),
            Error::InvalidArgument(InvalidArgument::TooFewArcs { count: 1 })
        );
        assert_eq!(
            "5".parse::<Oid>().unwrap_err(),
            Error::InvalidArgument(InvalidArgument::TooFewArcs { count: 1 })
        );
    }

    #[test]
    fn rejects_bad_dotted_components() {
        for input in ["", "1..2", "1.2.", ".1.2", "1.+2", "1.2.x", "1.2.-3", "1.2.99999999999999999999"] {
            assert_eq!(
                Oid::from_dotted(input).unwrap_err(),
                Error::InvalidArgument(InvalidArgument::InvalidComponent { input: input.to_owned() }),
                "{input:?}"
            );
        }
    }

    #[test]
    fn from_bytes_copies_and_validates() {
        let oid = Oid::from_bytes(&KRB5).unwrap();
        assert_ne!(oid.as_ptr(), KRB5.as_ptr());
        assert!(oid.is_owning());
        assert_eq!(
            Oid::from_bytes(&[]).unwrap_err(),
            Error::InvalidArgument(InvalidArgument::EmptyElements)
        );
        assert_eq!(
            Oid::from_bytes(&KRB5[..4]).unwrap_err(),
            Error::malformed(4, MalformedKind::Truncated)
        );
    }

    #[test]
    fn from_slice_borrows() {
        let oid = Oid::from_slice(&KRB5).unwrap();
        assert_eq!(oid.as_ptr(), KRB5.as_ptr());
        assert!(!oid.is_owning());
    }

    #[test]
    fn equality_ignores_ownership() {
        let owned = Oid::from_bytes(&KRB5).unwrap();
        let borrowed = Oid::from_slice(&KRB5).unwrap();
        let parsed: Oid = "1.2.840.113554.1.2.2".parse().unwrap();
        assert_eq!(owned, borrowed);
        assert_eq!(borrowed, parsed);
        assert_ne!(owned, Oid::from_dotted("1.2.840.113554.1.2.1").unwrap());
    }

    #[test]
    fn hash_set_lookup_by_bytes() {
        let mut set = HashSet::new();
        set.insert(Oid::from_bytes(&KRB5).unwrap());
        assert!(set.contains(&Oid::from_slice(&KRB5).unwrap()));
        assert!(set.contains(&KRB5[..]));
    }

    #[test]
    fn alias_does_not_own() {
        let owner = Oid::from_bytes(&KRB5).unwrap();
        let alias = owner.alias();
        assert!(!alias.is_owning());
        assert_eq!(alias.as_ptr(), owner.as_ptr());
        assert_eq!(alias, owner);
    }

    #[test]
    fn shallow_copy_keeps_buffer() {
        let a = Oid::from_bytes(&KRB5).unwrap();
        let pointer = a.as_ptr();
        let b = a.shallow_copy();
        assert_eq!(b.as_ptr(), pointer);
        assert!(b.is_owning());
    }

    #[test]
    fn clone_of_owned_is_deep() {
        let a = Oid::from_bytes(&KRB5).unwrap();
        let b = a.clone();
        assert_ne!(a.as_ptr(), b.as_ptr());
        assert_eq!(a, b);
        let borrowed = Oid::from_slice(&KRB5).unwrap();
        assert_eq!(borrowed.clone().as_ptr(), KRB5.as_ptr());
    }

    #[test]
    fn into_owned_reuses_allocation() {
        let owned = Oid::from_bytes(&KRB5).unwrap();
        let pointer = owned.as_ptr();
        assert_eq!(owned.into_owned().unwrap().as_ptr(), pointer);
        let borrowed = Oid::from_slice(&KRB5).unwrap().into_owned().unwrap();
        assert!(borrowed.is_owning());
        assert_ne!(borrowed.as_ptr(), KRB5.as_ptr());
    }

    #[test]
    fn prefix_check() {
        let krb5 = Oid::from_slice(&KRB5).unwrap();
        let principal = Oid::from_dotted("1.2.840.113554.1.2.2.1").unwrap();
        assert!(principal.starts_with(&krb5));
        assert!(krb5.starts_with(&krb5));
        assert!(!krb5.starts_with(&principal));
        let short = Oid::from_dotted("1.2.840.113554").unwrap();
        assert!(krb5.starts_with(&short));
        assert!(!Oid::from_dotted("1.2.840.1135540").unwrap().starts_with(&short));
    }

    #[test]
    fn der_round_trip() {
        let oid = Oid::from_slice(&KRB5).unwrap();
        let der = oid.to_der().unwrap();
        assert_eq!(der[..2], [0x06, 0x09]);
        assert_eq!(Oid::from_der(&der).unwrap(), oid);
    }

    #[test]
    fn array_conversion() {
        let oid = Oid::try_from([1u64, 3, 6, 1, 5, 5, 2]).unwrap();
        assert_eq!(oid.to_string(), "1.3.6.1.5.5.2");
        let arcs: Vec<u64> = oid.arcs().collect();
        assert_eq!(Oid::try_from(arcs.as_slice()).unwrap(), oid);
    }
}
