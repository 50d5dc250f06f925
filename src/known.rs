//! Mechanisms and name types GSSAPI callers commonly need

use crate::Oid;

/// Kerberos 5 (RFC 1964), 1.2.840.113554.1.2.2
pub const KRB5: Oid<'static> = Oid::from_static(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x12, 0x01, 0x02, 0x02]);
/// Pre-RFC Kerberos 5 mechanism, 1.3.5.1.5.2
pub const KRB5_OLD: Oid<'static> = Oid::from_static(&[0x2b, 0x05, 0x01, 0x05, 0x02]);
/// The misencoded Kerberos OID some Windows versions send, 1.2.840.48018.1.2.2
pub const KRB5_WRONG: Oid<'static> = Oid::from_static(&[0x2a, 0x86, 0x48, 0x82, 0xf7, 0x12, 0x01, 0x02, 0x02]);
/// SPNEGO (RFC 4178), 1.3.6.1.5.5.2
pub const SPNEGO: Oid<'static> = Oid::from_static(&[0x2b, 0x06, 0x01, 0x05, 0x05, 0x02]);
/// 1.3.6.1.4.1.311.2.2.10
pub const NTLMSSP: Oid<'static> = Oid::from_static(&[0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x02, 0x02, 0x0a]);
/// 1.3.6.1.5.2.5
pub const IAKERB: Oid<'static> = Oid::from_static(&[0x2b, 0x06, 0x01, 0x05, 0x02, 0x05]);

pub const NT_USER_NAME: Oid<'static> =
    Oid::from_static(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x12, 0x01, 0x02, 0x01, 0x01]);
pub const NT_MACHINE_UID_NAME: Oid<'static> =
    Oid::from_static(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x12, 0x01, 0x02, 0x01, 0x02]);
pub const NT_STRING_UID_NAME: Oid<'static> =
    Oid::from_static(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x12, 0x01, 0x02, 0x01, 0x03]);
/// `service@host` names (RFC 2743 section 4.1)
pub const NT_HOSTBASED_SERVICE: Oid<'static> =
    Oid::from_static(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x12, 0x01, 0x02, 0x01, 0x04]);
pub const NT_ANONYMOUS: Oid<'static> = Oid::from_static(&[0x2b, 0x06, 0x01, 0x05, 0x06, 0x03]);
pub const NT_EXPORT_NAME: Oid<'static> = Oid::from_static(&[0x2b, 0x06, 0x01, 0x05, 0x06, 0x04]);
/// RFC 6680
pub const NT_COMPOSITE_EXPORT: Oid<'static> = Oid::from_static(&[0x2b, 0x06, 0x01, 0x05, 0x06, 0x06]);
/// `user@REALM` Kerberos principal names
pub const NT_KRB5_PRINCIPAL: Oid<'static> =
    Oid::from_static(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x12, 0x01, 0x02, 0x02, 0x01]);
