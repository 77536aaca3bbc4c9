//! Recovers the subgroup order and the generator order when the domain
//! parameters do not carry them.

use {
    super::{DhUint, DomainParameters},
    crate::{
        crypto::Primality,
        error::{Error, Result},
    },
    tracing::{debug, warn},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderDeriver {
    pub primality: Primality,
}

impl OrderDeriver {
    /// Prime order `q` of the subgroup.
    ///
    /// Returns the supplied `q` if it is prime. Otherwise assumes `p` is a
    /// strong prime and returns `(p - 1) / 2` if that is prime.
    pub fn subgroup_order(&self, params: &DomainParameters) -> Result<DhUint> {
        let candidate = match params.order() {
            Some(order) => order,
            None => params.modulus() >> 1_usize,
        };
        if self.primality.is_probable_prime(candidate) {
            Ok(candidate)
        } else {
            Err(Error::MalformedGroup)
        }
    }

    /// Order of the generator `g`.
    ///
    /// This probes two candidates, `q - 1` and then `p - 1`, and returns the
    /// first one that `g` raised to it gives one. It is a heuristic that fits
    /// the standardized groups, not a general order finding algorithm: the
    /// result is a multiple of the true order.
    pub fn generator_order(&self, params: &DomainParameters) -> Result<DhUint> {
        let one = DhUint::from(1_u64);
        let generator = params.generator_element();
        let subgroup_order = self.subgroup_order(params)?;
        for order in [subgroup_order - one, params.modulus() - one] {
            if bool::from(generator.pow_vartime(order).is_one()) {
                debug!(bits = order.bit_len(), "derived generator order");
                return Ok(order);
            }
        }
        warn!("generator order is neither q - 1 nor p - 1");
        Err(Error::UnableToDetermineOrder)
    }

    /// Copy of `params` that always carries the subgroup order.
    pub fn duplicate_with_order(&self, params: &DomainParameters) -> Result<DomainParameters> {
        if params.order().is_some() {
            return Ok(params.clone());
        }
        let order = self.subgroup_order(params)?;
        debug!(bits = order.bit_len(), "derived subgroup order");
        params.with_order(order)
    }
}

pub fn derive_subgroup_order(params: &DomainParameters) -> Result<DhUint> {
    OrderDeriver::default().subgroup_order(params)
}

pub fn derive_generator_order(params: &DomainParameters) -> Result<DhUint> {
    OrderDeriver::default().generator_order(params)
}

pub fn duplicate_with_order(params: &DomainParameters) -> Result<DomainParameters> {
    OrderDeriver::default().duplicate_with_order(params)
}
