//! Conversions between [`Oid`]/[`OidSet`] and the native `gss_OID_desc`/`gss_OID_set_desc` structures

use std::{ffi::c_void, marker::PhantomData};

use libgssapi_sys::{gss_OID_desc, gss_OID_set_desc};

use crate::{
    buffer::Ownership,
    error::{InvalidArgument, Result},
    Oid, OidSet,
};

impl<'a> Oid<'a> {
    /// Borrows an OID the native library handed out, e.g. the `actual_mech_type` of `gss_init_sec_context`.
    ///
    /// # Safety
    /// `oid` must be null or point to a valid descriptor whose elements stay alive and unchanged for `'a`.
    pub unsafe fn from_gss(oid: *const gss_OID_desc) -> Result<Oid<'a>> {
        let Some(desc) = (unsafe { oid.as_ref() }) else {
            return Err(InvalidArgument::NullPointer.into());
        };
        unsafe { Oid::wrap_foreign(desc.elements as *const u8, desc.length as usize, Ownership::Borrowed) }
    }
    /// Descriptor for passing this OID into the native library, which only reads it.
    /// The descriptor must not outlive `self`.
    pub fn as_gss_desc(&self) -> gss_OID_desc {
        gss_OID_desc {
            length: self.len() as _,
            elements: self.as_ptr() as *mut c_void,
        }
    }
}

impl OidSet {
    /// Deep copies a native OID set. A null set (`GSS_C_NO_OID_SET`) gives an empty set.
    ///
    /// # Safety
    /// `set` must be null or point to a valid set whose `count` descriptors are all valid.
    pub unsafe fn from_gss(set: *const gss_OID_set_desc) -> Result<OidSet> {
        let mut out = OidSet::new();
        let Some(set) = (unsafe { set.as_ref() }) else {
            return Ok(out);
        };
        if set.count == 0 {
            return Ok(out);
        }
        if set.elements.is_null() {
            return Err(InvalidArgument::NullPointer.into());
        }
        let members = unsafe { std::slice::from_raw_parts(set.elements, set.count as usize) };
        for member in members {
            out.insert(unsafe { Oid::from_gss(member) }?)?;
        }
        Ok(out)
    }
    pub fn as_gss_set(&self) -> GssOidSetView<'_> {
        GssOidSetView {
            descs: self.iter().map(Oid::as_gss_desc).collect(),
            _set: PhantomData,
        }
    }
}

/// Native descriptors borrowing an [`OidSet`], for passing e.g. `desired_mechs` to `gss_acquire_cred`
pub struct GssOidSetView<'s> {
    descs: Box<[gss_OID_desc]>,
    _set: PhantomData<&'s OidSet>,
}
impl GssOidSetView<'_> {
    /// The returned descriptor points into `self` and must not outlive it
    pub fn as_desc(&mut self) -> gss_OID_set_desc {
        gss_OID_set_desc {
            count: self.descs.len() as _,
            elements: self.descs.as_mut_ptr(),
        }
    }
}
