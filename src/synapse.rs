use rand::Rng;

/// Half-width of the symmetric range initial weights are drawn from.
pub const INIT_WEIGHT_RANGE: f64 = 1.0;

/// Weighted edge from a node of the previous layer into a neuron.
///
/// `source` indexes the previous layer's node list. The synapse is owned by the neuron
/// it feeds and never holds a reference to its source.
#[derive(Debug, Clone, PartialEq)]
pub struct Synapse {
    source: usize,
    weight: f64,
    momentum: f64,
}

impl Synapse {
    pub fn new_with_rng<R: Rng + ?Sized>(source: usize, rng: &mut R) -> Self {
        Self {
            source,
            weight: random_weight(rng),
            momentum: 0.0,
        }
    }

    pub fn from_parts(source: usize, weight: f64, momentum: f64) -> Self {
        Self {
            source,
            weight,
            momentum,
        }
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The previous weight adjustment.
    #[inline]
    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Applies `delta_weight` and remembers it for the next momentum term.
    #[inline]
    pub fn adjust(&mut self, delta_weight: f64) {
        self.weight += delta_weight;
        self.momentum = delta_weight;
    }

    pub fn reinitialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.weight = random_weight(rng);
        self.momentum = 0.0;
    }
}

#[inline]
fn random_weight<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(-INIT_WEIGHT_RANGE..INIT_WEIGHT_RANGE)
}
