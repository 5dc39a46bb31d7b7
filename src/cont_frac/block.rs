use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::mem::swap;

/// The last two convergents `p_(k-1)/q_(k-1)` and `p_(k-2)/q_(k-2)` of a simple
/// continued fraction, advanced one coefficient at a time.
/// The method is described in <https://crypto.stanford.edu/pbc/notes/contfrac/compute.html>
#[derive(Debug, Clone)]
pub(crate) struct Block {
    pm1: BigInt, // p_(k-1)
    pm2: BigInt, // p_(k-2)
    qm1: BigInt, // q_(k-1)
    qm2: BigInt, // q_(k-2)
}

impl Block {
    /// The block before any coefficient is consumed, `p_(-1)/q_(-1) = 1/0` and `p_(-2)/q_(-2) = 0/1`
    pub fn identity() -> Self {
        Block {
            pm1: BigInt::one(),
            pm2: BigInt::zero(),
            qm1: BigInt::zero(),
            qm2: BigInt::one(),
        }
    }

    /// Consume the next coefficient and return the new convergent `(p_k, q_k)`
    pub fn push(&mut self, a: &BigInt) -> (BigInt, BigInt) {
        // p_k = a_k * p_(k-1) + p_(k-2)
        let p = a * &self.pm1 + &self.pm2;
        // q_k = a_k * q_(k-1) + q_(k-2)
        let q = a * &self.qm1 + &self.qm2;

        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p.clone();
        self.qm1 = q.clone();
        (p, q)
    }
}
