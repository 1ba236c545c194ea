use crate::traits::{DynamicalSystem, Scalar, Steppable};

/// Forward Euler: `y_next = y + dt * f(t, y)`.
pub struct Euler<T: Scalar> {
    slope: Vec<T>,
}

impl<T: Scalar> Euler<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            slope: vec![T::zero(); dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for Euler<T> {
    fn step(&mut self, system: &impl DynamicalSystem<T>, t: &mut T, state: &mut [T], dt: T) {
        let t0 = *t;
        system.apply(t0, state, &mut self.slope);
        for (y, k) in state.iter_mut().zip(&self.slope) {
            *y = *y + dt * *k;
        }
        *t = t0 + dt;
    }
}

/// Improved Euler (Heun) predictor-corrector.
///
/// Predicts with a plain Euler step, then advances with the mean of the
/// slopes at both ends of the interval.
pub struct ImprovedEuler<T: Scalar> {
    k1: Vec<T>,
    k2: Vec<T>,
    predictor: Vec<T>,
}

impl<T: Scalar> ImprovedEuler<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            k1: vec![T::zero(); dim],
            k2: vec![T::zero(); dim],
            predictor: vec![T::zero(); dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for ImprovedEuler<T> {
    fn step(&mut self, system: &impl DynamicalSystem<T>, t: &mut T, state: &mut [T], dt: T) {
        let half = T::constant(0.5);
        let t0 = *t;

        system.apply(t0, state, &mut self.k1);
        offset(&mut self.predictor, state, &self.k1, dt);
        system.apply(t0 + dt, &self.predictor, &mut self.k2);

        // y_next = y + dt/2 * (k1 + k2)
        for (y, (&k1, &k2)) in state.iter_mut().zip(self.k1.iter().zip(&self.k2)) {
            *y = *y + dt * half * (k1 + k2);
        }

        *t = t0 + dt;
    }
}

/// Classical fourth-order Runge-Kutta with slope weights 1, 2, 2, 1.
pub struct RK4<T: Scalar> {
    k1: Vec<T>,
    k2: Vec<T>,
    k3: Vec<T>,
    k4: Vec<T>,
    stage: Vec<T>,
}

impl<T: Scalar> RK4<T> {
    pub fn new(dim: usize) -> Self {
        let z = T::zero();
        Self {
            k1: vec![z; dim],
            k2: vec![z; dim],
            k3: vec![z; dim],
            k4: vec![z; dim],
            stage: vec![z; dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for RK4<T> {
    fn step(&mut self, system: &impl DynamicalSystem<T>, t: &mut T, state: &mut [T], dt: T) {
        let half = T::constant(0.5);
        let sixth = T::constant(1.0 / 6.0);
        let two = T::constant(2.0);

        let t0 = *t;
        let t_mid = t0 + dt * half;

        system.apply(t0, state, &mut self.k1);
        offset(&mut self.stage, state, &self.k1, dt * half);
        system.apply(t_mid, &self.stage, &mut self.k2);
        offset(&mut self.stage, state, &self.k2, dt * half);
        system.apply(t_mid, &self.stage, &mut self.k3);
        offset(&mut self.stage, state, &self.k3, dt);
        system.apply(t0 + dt, &self.stage, &mut self.k4);

        // y_next = y + dt/6 * (k1 + 2k2 + 2k3 + k4)
        let slopes = self.k1.iter().zip(&self.k2).zip(&self.k3).zip(&self.k4);
        for (y, (((&k1, &k2), &k3), &k4)) in state.iter_mut().zip(slopes) {
            *y = *y + dt * sixth * (k1 + two * k2 + two * k3 + k4);
        }

        *t = t0 + dt;
    }
}

/// out = y + scale * k
fn offset<T: Scalar>(out: &mut [T], y: &[T], k: &[T], scale: T) {
    for ((o, &y), &k) in out.iter_mut().zip(y).zip(k) {
        *o = y + scale * k;
    }
}
