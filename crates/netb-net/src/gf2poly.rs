use std::fmt;

/// Polynomial over GF(2) of degree at most 63; bit `i` is the coefficient of `z^i`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gf2Poly(u64);

impl fmt::Debug for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf2Poly({})", self)
    }
}

/// Renders the coefficients as binary digits, highest degree first.
impl fmt::Display for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

impl Gf2Poly {
    /// The constant polynomial `1`.
    pub const ONE: Gf2Poly = Gf2Poly(1);

    /// Creates a polynomial from its packed coefficients.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Packed coefficients.
    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(63 - self.0.leading_zeros() as usize)
        }
    }

    /// Coefficient of `z^power`.
    pub fn coefficient(&self, power: usize) -> bool {
        power < 64 && (self.0 >> power) & 1 == 1
    }

    /// Parses binary digits written highest degree first (`"1011"` is `z^3 + z + 1`).
    pub fn from_binary_str(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || text.len() > 64 || !text.chars().all(|c| c == '0' || c == '1') {
            return None;
        }
        u64::from_str_radix(text, 2).ok().map(Self)
    }

    /// `(self * other) mod modulus`.
    pub fn mul_mod(self, other: Gf2Poly, modulus: Gf2Poly) -> Gf2Poly {
        let Some(degree) = modulus.degree() else {
            return Gf2Poly(0);
        };
        let top = 1u64 << degree;
        let mut a = self.reduce(modulus).0;
        let mut b = other.reduce(modulus).0;
        let mut result = 0u64;
        while b != 0 {
            if b & 1 == 1 {
                result ^= a;
            }
            b >>= 1;
            a <<= 1;
            if a & top != 0 {
                a ^= modulus.0;
            }
        }
        Gf2Poly(result)
    }

    /// `self mod modulus`.
    pub fn reduce(self, modulus: Gf2Poly) -> Gf2Poly {
        let Some(degree) = modulus.degree() else {
            return self;
        };
        let mut value = self.0;
        while let Some(current) = Gf2Poly(value).degree() {
            if current < degree {
                break;
            }
            value ^= modulus.0 << (current - degree);
        }
        Gf2Poly(value)
    }

    /// `self^exponent mod modulus`.
    pub fn pow_mod(self, mut exponent: u64, modulus: Gf2Poly) -> Gf2Poly {
        let mut base = self.reduce(modulus);
        let mut result = Gf2Poly::ONE.reduce(modulus);
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.mul_mod(base, modulus);
            }
            base = base.mul_mod(base, modulus);
            exponent >>= 1;
        }
        result
    }

    /// Whether the polynomial is primitive, i.e. `z` has order `2^d - 1` modulo it.
    ///
    /// A reducible polynomial has fewer than `2^d - 1` units in its residue ring,
    /// so the order test alone also certifies irreducibility.
    pub fn is_primitive(&self) -> bool {
        let Some(degree) = self.degree() else {
            return false;
        };
        if degree == 0 || degree > 32 || self.0 & 1 == 0 {
            return false;
        }
        let order = (1u64 << degree) - 1;
        let z = Gf2Poly(0b10);
        if z.pow_mod(order, *self) != Gf2Poly::ONE {
            return false;
        }
        prime_factors(order)
            .into_iter()
            .all(|factor| z.pow_mod(order / factor, *self) != Gf2Poly::ONE)
    }
}

/// Primitive polynomials sorted by degree then by packed value.
///
/// The first entries are `z + 1`, `z^2 + z + 1`, `z^3 + z + 1`, `z^3 + z^2 + 1`.
pub fn primitive_polynomials(count: usize) -> Vec<Gf2Poly> {
    let mut found = Vec::with_capacity(count);
    let mut degree = 1usize;
    while found.len() < count && degree <= 32 {
        let low = 1u64 << degree;
        let high = 1u64 << (degree + 1);
        let mut candidate = low | 1;
        while candidate < high && found.len() < count {
            let poly = Gf2Poly(candidate);
            if poly.is_primitive() {
                found.push(poly);
            }
            candidate += 2;
        }
        degree += 1;
    }
    found
}

/// Smallest primitive polynomial of the given degree.
pub fn first_primitive_of_degree(degree: usize) -> Option<Gf2Poly> {
    if degree == 0 || degree > 32 {
        return None;
    }
    let low = 1u64 << degree;
    let high = 1u64 << (degree + 1);
    (low | 1..high)
        .step_by(2)
        .map(Gf2Poly)
        .find(|poly| poly.is_primitive())
}

fn prime_factors(mut value: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut divisor = 2u64;
    while divisor * divisor <= value {
        if value % divisor == 0 {
            factors.push(divisor);
            while value % divisor == 0 {
                value /= divisor;
            }
        }
        divisor += 1;
    }
    if value > 1 {
        factors.push(value);
    }
    factors
}
