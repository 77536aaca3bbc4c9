//! Domain parameter acceptance.
//!
//! Runs the usual Diffie-Hellman structure check and then forgives the two
//! findings that the RFC 5114 groups trip by construction: their moduli are
//! not safe primes and their generators are not 2 or 5.

use {
    super::{lookup, DhUint, DomainParameters, GroupId},
    crate::{
        crypto::Primality,
        error::{Error, Result},
    },
    tracing::{debug, warn},
};

flags! {
    /// Findings of the domain parameter structure check.
    pub struct ParameterCheck(u8) {
        const P_NOT_PRIME = 0x01;
        const P_NOT_SAFE_PRIME = 0x02;
        /// Generator is neither 2 nor 5, so the classic residue tests do not apply.
        const UNABLE_TO_CHECK_GENERATOR = 0x04;
        const NOT_SUITABLE_GENERATOR = 0x08;
        const Q_NOT_PRIME = 0x10;
        const INVALID_Q_VALUE = 0x20;
    }
}

/// How to handle a tolerable finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leniency {
    /// Ignore it.
    Allow,

    /// Ignore it, but log a warning.
    Warn,

    /// Reject the parameters.
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Modulus `p` is prime but `(p - 1) / 2` is not.
    pub not_safe_prime:    Leniency,

    /// Generator is outside `{2, 5}`.
    pub unknown_generator: Leniency,

    pub primality:         Primality,
}

/// Forgives the RFC 5114 findings silently.
impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            not_safe_prime:    Leniency::Allow,
            unknown_generator: Leniency::Allow,
            primality:         Primality::default(),
        }
    }
}

impl ValidationPolicy {
    /// Every finding is fatal.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            not_safe_prime:    Leniency::Strict,
            unknown_generator: Leniency::Strict,
            ..Self::default()
        }
    }

    /// Removes the findings this policy tolerates.
    fn relax(&self, mut check: ParameterCheck) -> ParameterCheck {
        for (finding, leniency) in [
            (ParameterCheck::P_NOT_SAFE_PRIME, self.not_safe_prime),
            (ParameterCheck::UNABLE_TO_CHECK_GENERATOR, self.unknown_generator),
        ] {
            if check.contains(finding) && lenient(leniency, finding) {
                check.remove(finding);
            }
        }
        check
    }
}

fn lenient(leniency: Leniency, finding: ParameterCheck) -> bool {
    match leniency {
        Leniency::Strict => false,
        Leniency::Warn => {
            warn!(%finding, "tolerating domain parameter finding");
            true
        }
        Leniency::Allow => true,
    }
}

/// Runs the structure check and returns every finding.
#[must_use]
pub fn structure_check(params: &DomainParameters, primality: &Primality) -> ParameterCheck {
    let mut check = ParameterCheck::EMPTY;
    let modulus = params.modulus();
    let generator = params.generator();
    let two = DhUint::from(2_u64);
    let five = DhUint::from(5_u64);

    // Construction guarantees p >= 5, so p - 2 does not wrap.
    if generator < two || generator > modulus - two {
        check |= ParameterCheck::NOT_SUITABLE_GENERATOR;
    }
    match params.order() {
        Some(order) => {
            if !bool::from(params.generator_element().pow_vartime(order).is_one()) {
                check |= ParameterCheck::NOT_SUITABLE_GENERATOR;
            }
            if !primality.is_probable_prime(order) {
                check |= ParameterCheck::Q_NOT_PRIME;
            }
            if modulus % order != DhUint::from(1_u64) {
                check |= ParameterCheck::INVALID_Q_VALUE;
            }
        }
        None if generator == two => {
            if modulus % DhUint::from(24_u64) != DhUint::from(11_u64) {
                check |= ParameterCheck::NOT_SUITABLE_GENERATOR;
            }
        }
        None if generator == five => {
            let residue = modulus % DhUint::from(10_u64);
            if residue != DhUint::from(3_u64) && residue != DhUint::from(7_u64) {
                check |= ParameterCheck::NOT_SUITABLE_GENERATOR;
            }
        }
        None => {}
    }
    if generator != two && generator != five {
        check |= ParameterCheck::UNABLE_TO_CHECK_GENERATOR;
    }

    if !primality.is_probable_prime(modulus) {
        check |= ParameterCheck::P_NOT_PRIME;
    } else if !primality.is_probable_prime(modulus >> 1_usize) {
        // p is odd, so p >> 1 == (p - 1) / 2.
        check |= ParameterCheck::P_NOT_SAFE_PRIME;
    }
    check
}

/// Resolves and validates domain parameters.
///
/// Without explicit parameters the standardized group `hint` is used.
/// Returns the parameters if no finding remains after applying the policy.
pub fn accept(
    params: Option<DomainParameters>,
    hint: GroupId,
    policy: &ValidationPolicy,
) -> Result<DomainParameters> {
    let params = params.unwrap_or_else(|| {
        debug!(group = %hint, "using standardized domain parameters");
        lookup(hint).clone()
    });
    let findings = structure_check(&params, &policy.primality);
    let remaining = policy.relax(findings);
    if remaining.is_empty() {
        debug!(%findings, "accepted domain parameters");
        Ok(params)
    } else {
        Err(Error::InvalidParameters(remaining))
    }
}
