//! Per-cycle cost grid and arg-min selection

use crate::common::{DwaError, DwaResult, VelocityCommand};

use super::AxisSamples;

/// Costs of every `(vx, vy, omega)` candidate, stored flat with row-major
/// strides so that omega is the fastest-varying index.
#[derive(Debug, Clone)]
pub struct CostGrid {
    vx: AxisSamples,
    vy: AxisSamples,
    omega: AxisSamples,
    costs: Vec<f64>,
}

/// Winning candidate of a cost grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub index: (usize, usize, usize),
    pub command: VelocityCommand,
    pub cost: f64,
}

impl CostGrid {
    /// Zero-cost grid spanning the three axes
    pub fn new(vx: AxisSamples, vy: AxisSamples, omega: AxisSamples) -> Self {
        let len = vx.count * vy.count * omega.count;
        Self { vx, vy, omega, costs: vec![0.0; len] }
    }

    pub fn dims(&self) -> (usize, usize, usize) {
        (self.vx.count, self.vy.count, self.omega.count)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.vx.count && j < self.vy.count && k < self.omega.count);
        (i * self.vy.count + j) * self.omega.count + k
    }

    pub fn get(&self, i: usize, j: usize, k: usize) -> f64 {
        self.costs[self.offset(i, j, k)]
    }

    pub fn set(&mut self, i: usize, j: usize, k: usize, cost: f64) {
        let idx = self.offset(i, j, k);
        self.costs[idx] = cost;
    }

    /// Costs in scan order
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Velocity that cell `(i, j, k)` stands for
    pub fn command_at(&self, i: usize, j: usize, k: usize) -> VelocityCommand {
        VelocityCommand::new(self.vx.value(i), self.vy.value(j), self.omega.value(k))
    }

    fn unflatten(&self, offset: usize) -> (usize, usize, usize) {
        let plane = self.vy.count * self.omega.count;
        (
            offset / plane,
            (offset % plane) / self.omega.count,
            offset % self.omega.count,
        )
    }

    /// Lowest-cost candidate.
    ///
    /// Cells are scanned vx outer, vy middle, omega inner and only a strictly
    /// lower cost replaces the running minimum, so ties resolve to the
    /// earliest cell.
    pub fn select(&self) -> DwaResult<Selection> {
        let mut best: Option<(usize, f64)> = None;
        for (offset, &cost) in self.costs.iter().enumerate() {
            let better = match best {
                None => true,
                Some((_, min_cost)) => cost < min_cost,
            };
            if better {
                best = Some((offset, cost));
            }
        }

        let (offset, cost) = best.ok_or(DwaError::EmptyCostGrid)?;
        let (i, j, k) = self.unflatten(offset);
        Ok(Selection {
            index: (i, j, k),
            command: self.command_at(i, j, k),
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_2x2x2() -> CostGrid {
        CostGrid::new(
            AxisSamples::new(-0.1, 0.1, 2),
            AxisSamples::new(-0.2, 0.2, 2),
            AxisSamples::new(-0.5, 0.5, 2),
        )
    }

    fn fill(grid: &mut CostGrid, value: f64) {
        let (nx, ny, nw) = grid.dims();
        for i in 0..nx {
            for j in 0..ny {
                for k in 0..nw {
                    grid.set(i, j, k, value);
                }
            }
        }
    }

    #[test]
    fn test_flat_layout() {
        let mut grid = grid_2x2x2();
        grid.set(1, 0, 1, 3.0);
        assert_eq!(grid.costs()[5], 3.0);
        assert_eq!(grid.get(1, 0, 1), 3.0);
        assert_eq!(grid.unflatten(5), (1, 0, 1));
    }

    #[test]
    fn test_select_strict_minimum() {
        let mut grid = grid_2x2x2();
        fill(&mut grid, 1.0);
        grid.set(1, 0, 1, 0.25);

        let sel = grid.select().unwrap();
        assert_eq!(sel.index, (1, 0, 1));
        assert_eq!(sel.cost, 0.25);
        assert_eq!(sel.command, VelocityCommand::new(-0.1 + 0.1, -0.2, -0.5 + 0.5));
    }

    #[test]
    fn test_select_tie_keeps_first_scanned() {
        let mut grid = grid_2x2x2();
        fill(&mut grid, 1.0);
        grid.set(0, 0, 0, 0.5);
        grid.set(1, 1, 1, 0.5);

        let sel = grid.select().unwrap();
        assert_eq!(sel.index, (0, 0, 0));
        assert_eq!(sel.command, VelocityCommand::new(-0.1, -0.2, -0.5));
    }

    #[test]
    fn test_select_all_equal() {
        let mut grid = grid_2x2x2();
        fill(&mut grid, 7.0);
        assert_eq!(grid.select().unwrap().index, (0, 0, 0));
    }

    #[test]
    fn test_select_large_costs() {
        let mut grid = grid_2x2x2();
        fill(&mut grid, 1.0e6);
        grid.set(0, 1, 0, 2.0e4);
        assert_eq!(grid.select().unwrap().index, (0, 1, 0));
    }

    #[test]
    fn test_select_empty_grid() {
        let grid = CostGrid::new(
            AxisSamples::new(0.0, 0.1, 0),
            AxisSamples::new(0.0, 0.1, 3),
            AxisSamples::new(0.0, 0.1, 3),
        );
        assert!(grid.is_empty());
        assert!(matches!(grid.select(), Err(DwaError::EmptyCostGrid)));
    }
}
