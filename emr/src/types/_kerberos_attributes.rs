/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Attributes for Kerberos configuration when Kerberos authentication is enabled using a security configuration.</p>
/// <p>The password members are sensitive; they are redacted from <code>Debug</code> output.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash)]
pub struct KerberosAttributes {
    /// <p>The name of the Kerberos realm to which all nodes in a cluster belong. For example, <code>EC2.INTERNAL</code>.</p>
    pub realm: ::std::option::Option<::std::string::String>,
    /// <p>The password used within the cluster for the kadmin service on the cluster-dedicated KDC, which maintains Kerberos principals, password policies, and keytabs for the cluster.</p>
    pub kdc_admin_password: ::std::option::Option<::std::string::String>,
    /// <p>Required only when establishing a cross-realm trust with a KDC in a different realm. The cross-realm principal password, which must be identical across realms.</p>
    pub cross_realm_trust_principal_password: ::std::option::Option<::std::string::String>,
    /// <p>Required only when establishing a cross-realm trust with an Active Directory domain. A user with sufficient privileges to join resources to the domain.</p>
    pub ad_domain_join_user: ::std::option::Option<::std::string::String>,
    /// <p>The Active Directory password for <code>ad_domain_join_user</code>.</p>
    pub ad_domain_join_password: ::std::option::Option<::std::string::String>,
}
impl KerberosAttributes {
    /// <p>The name of the Kerberos realm to which all nodes in a cluster belong. For example, <code>EC2.INTERNAL</code>.</p>
    pub fn realm(&self) -> ::std::option::Option<&str> {
        self.realm.as_deref()
    }
    /// <p>The password used within the cluster for the kadmin service on the cluster-dedicated KDC, which maintains Kerberos principals, password policies, and keytabs for the cluster.</p>
    pub fn kdc_admin_password(&self) -> ::std::option::Option<&str> {
        self.kdc_admin_password.as_deref()
    }
    /// <p>Required only when establishing a cross-realm trust with a KDC in a different realm. The cross-realm principal password, which must be identical across realms.</p>
    pub fn cross_realm_trust_principal_password(&self) -> ::std::option::Option<&str> {
        self.cross_realm_trust_principal_password.as_deref()
    }
    /// <p>Required only when establishing a cross-realm trust with an Active Directory domain. A user with sufficient privileges to join resources to the domain.</p>
    pub fn ad_domain_join_user(&self) -> ::std::option::Option<&str> {
        self.ad_domain_join_user.as_deref()
    }
    /// <p>The Active Directory password for <code>ad_domain_join_user</code>.</p>
    pub fn ad_domain_join_password(&self) -> ::std::option::Option<&str> {
        self.ad_domain_join_password.as_deref()
    }
}
impl ::std::fmt::Debug for KerberosAttributes {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("KerberosAttributes");
        formatter.field("realm", &self.realm);
        formatter.field("kdc_admin_password", &"*** Sensitive Data Redacted ***");
        formatter.field("cross_realm_trust_principal_password", &"*** Sensitive Data Redacted ***");
        formatter.field("ad_domain_join_user", &self.ad_domain_join_user);
        formatter.field("ad_domain_join_password", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
impl KerberosAttributes {
    /// Creates a new builder-style object to manufacture [`KerberosAttributes`](crate::types::KerberosAttributes).
    pub fn builder() -> crate::types::builders::KerberosAttributesBuilder {
        crate::types::builders::KerberosAttributesBuilder::default()
    }
    /// Converts this [`KerberosAttributes`](crate::types::KerberosAttributes) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::KerberosAttributesBuilder {
        crate::types::builders::KerberosAttributesBuilder {
            realm: self.realm,
            kdc_admin_password: self.kdc_admin_password,
            cross_realm_trust_principal_password: self.cross_realm_trust_principal_password,
            ad_domain_join_user: self.ad_domain_join_user,
            ad_domain_join_password: self.ad_domain_join_password,
        }
    }
}

/// A builder for [`KerberosAttributes`](crate::types::KerberosAttributes).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default)]
pub struct KerberosAttributesBuilder {
    pub(crate) realm: ::std::option::Option<::std::string::String>,
    pub(crate) kdc_admin_password: ::std::option::Option<::std::string::String>,
    pub(crate) cross_realm_trust_principal_password: ::std::option::Option<::std::string::String>,
    pub(crate) ad_domain_join_user: ::std::option::Option<::std::string::String>,
    pub(crate) ad_domain_join_password: ::std::option::Option<::std::string::String>,
}
impl KerberosAttributesBuilder {
    /// <p>The name of the Kerberos realm to which all nodes in a cluster belong. For example, <code>EC2.INTERNAL</code>.</p>
    pub fn realm(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.realm = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the Kerberos realm to which all nodes in a cluster belong. For example, <code>EC2.INTERNAL</code>.</p>
    pub fn set_realm(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.realm = input;
        self
    }
    /// <p>The name of the Kerberos realm to which all nodes in a cluster belong. For example, <code>EC2.INTERNAL</code>.</p>
    pub fn get_realm(&self) -> &::std::option::Option<::std::string::String> {
        &self.realm
    }
    /// <p>The password used within the cluster for the kadmin service on the cluster-dedicated KDC, which maintains Kerberos principals, password policies, and keytabs for the cluster.</p>
    pub fn kdc_admin_password(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.kdc_admin_password = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The password used within the cluster for the kadmin service on the cluster-dedicated KDC, which maintains Kerberos principals, password policies, and keytabs for the cluster.</p>
    pub fn set_kdc_admin_password(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.kdc_admin_password = input;
        self
    }
    /// <p>The password used within the cluster for the kadmin service on the cluster-dedicated KDC, which maintains Kerberos principals, password policies, and keytabs for the cluster.</p>
    pub fn get_kdc_admin_password(&self) -> &::std::option::Option<::std::string::String> {
        &self.kdc_admin_password
    }
    /// <p>Required only when establishing a cross-realm trust with a KDC in a different realm. The cross-realm principal password, which must be identical across realms.</p>
    pub fn cross_realm_trust_principal_password(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cross_realm_trust_principal_password = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Required only when establishing a cross-realm trust with a KDC in a different realm. The cross-realm principal password, which must be identical across realms.</p>
    pub fn set_cross_realm_trust_principal_password(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cross_realm_trust_principal_password = input;
        self
    }
    /// <p>Required only when establishing a cross-realm trust with a KDC in a different realm. The cross-realm principal password, which must be identical across realms.</p>
    pub fn get_cross_realm_trust_principal_password(&self) -> &::std::option::Option<::std::string::String> {
        &self.cross_realm_trust_principal_password
    }
    /// <p>Required only when establishing a cross-realm trust with an Active Directory domain. A user with sufficient privileges to join resources to the domain.</p>
    pub fn ad_domain_join_user(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.ad_domain_join_user = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Required only when establishing a cross-realm trust with an Active Directory domain. A user with sufficient privileges to join resources to the domain.</p>
    pub fn set_ad_domain_join_user(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.ad_domain_join_user = input;
        self
    }
    /// <p>Required only when establishing a cross-realm trust with an Active Directory domain. A user with sufficient privileges to join resources to the domain.</p>
    pub fn get_ad_domain_join_user(&self) -> &::std::option::Option<::std::string::String> {
        &self.ad_domain_join_user
    }
    /// <p>The Active Directory password for <code>ad_domain_join_user</code>.</p>
    pub fn ad_domain_join_password(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.ad_domain_join_password = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Active Directory password for <code>ad_domain_join_user</code>.</p>
    pub fn set_ad_domain_join_password(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.ad_domain_join_password = input;
        self
    }
    /// <p>The Active Directory password for <code>ad_domain_join_user</code>.</p>
    pub fn get_ad_domain_join_password(&self) -> &::std::option::Option<::std::string::String> {
        &self.ad_domain_join_password
    }
    /// Consumes the builder and constructs a [`KerberosAttributes`](crate::types::KerberosAttributes).
    pub fn build(self) -> crate::types::KerberosAttributes {
        crate::types::KerberosAttributes {
            realm: self.realm,
            kdc_admin_password: self.kdc_admin_password,
            cross_realm_trust_principal_password: self.cross_realm_trust_principal_password,
            ad_domain_join_user: self.ad_domain_join_user,
            ad_domain_join_password: self.ad_domain_join_password,
        }
    }
}
impl ::std::fmt::Debug for KerberosAttributesBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("KerberosAttributesBuilder");
        formatter.field("realm", &self.realm);
        formatter.field("kdc_admin_password", &"*** Sensitive Data Redacted ***");
        formatter.field("cross_realm_trust_principal_password", &"*** Sensitive Data Redacted ***");
        formatter.field("ad_domain_join_user", &self.ad_domain_join_user);
        formatter.field("ad_domain_join_password", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}

#[cfg(test)]
mod test {
    use crate::types::KerberosAttributes;

    #[test]
    fn passwords_are_redacted_from_debug_output() {
        let builder = KerberosAttributes::builder()
            .realm("EC2.INTERNAL")
            .kdc_admin_password("kdc-secret")
            .cross_realm_trust_principal_password("trust-secret")
            .ad_domain_join_user("joiner")
            .ad_domain_join_password("ad-secret");
        let attributes = builder.clone().build();

        for debug in [format!("{:?}", builder), format!("{:?}", attributes)] {
            assert!(debug.contains("EC2.INTERNAL"), "{}", debug);
            assert!(debug.contains("joiner"), "{}", debug);
            assert!(!debug.contains("secret"), "{}", debug);
            assert_eq!(3, debug.matches("*** Sensitive Data Redacted ***").count());
        }
    }

    #[test]
    fn redaction_does_not_hide_values_from_getters() {
        let attributes = KerberosAttributes::builder()
            .kdc_admin_password("kdc-secret")
            .build();
        assert_eq!(Some("kdc-secret"), attributes.kdc_admin_password());
        assert_eq!(None, attributes.ad_domain_join_password());
    }
}
