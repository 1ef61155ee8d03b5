/*
MIT License

Copyright (c) 2025 scatter-rs developers
*/

//! In-memory trajectory model and pair/element resolver
//!
//! A [`Trajectory`] owns a shared [`Topology`], per-frame coordinates in an
//! orthorhombic periodic box, and per-frame timestamps. Frames are assumed
//! to be uniformly spaced in time; [`Trajectory::timestep`] validates this
//! eagerly and non-uniform spacing is a fatal input error.
//!
//! Units follow the MD convention: lengths in nanometers, times in
//! picoseconds.

mod element;
pub mod errors;
mod topology;

pub use element::{atomic_number_from_symbol, atomic_weight, element_symbol, Element};
pub use errors::{Result, TrajError};
pub use topology::{Atom, Selection, Topology};

use ndarray::{Array1, Array2, Array3, ArrayView1, ArrayView2};

/// Denominator convention for composition fractions
///
/// Every composition within one computation must be taken against the same
/// denominator; mixing the two conventions skews the weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denominator {
    /// All atoms, including massless virtual sites
    AllAtoms,
    /// Physical atoms only (nonzero mass)
    PhysicalAtoms,
}

/// An ordered sequence of frames over a shared topology
#[derive(Debug, Clone)]
pub struct Trajectory {
    topology: Topology,
    /// Coordinates in nm, shape (n_frames, n_atoms, 3)
    coords: Array3<f64>,
    /// Orthorhombic box edge lengths in nm, shape (n_frames, 3)
    box_lengths: Array2<f64>,
    /// Frame timestamps in ps, shape (n_frames,)
    time: Array1<f64>,
}

impl Trajectory {
    /// Create a trajectory, validating array shapes against the topology
    pub fn new(
        topology: Topology,
        coords: Array3<f64>,
        box_lengths: Array2<f64>,
        time: Array1<f64>,
    ) -> Result<Self> {
        let n_frames = coords.shape()[0];
        let n_atoms = coords.shape()[1];

        if coords.shape()[2] != 3 {
            return Err(TrajError::InvalidShape(format!(
                "coordinates must be (n_frames, n_atoms, 3), got {:?}",
                coords.shape()
            )));
        }
        if n_atoms != topology.n_atoms() {
            return Err(TrajError::InvalidShape(format!(
                "coordinate array has {} atoms but topology has {}",
                n_atoms,
                topology.n_atoms()
            )));
        }
        if box_lengths.shape() != [n_frames, 3] {
            return Err(TrajError::InvalidShape(format!(
                "box lengths must be (n_frames, 3), got {:?}",
                box_lengths.shape()
            )));
        }
        if time.len() != n_frames {
            return Err(TrajError::InvalidShape(format!(
                "time axis has {} entries for {} frames",
                time.len(),
                n_frames
            )));
        }

        Ok(Self {
            topology,
            coords,
            box_lengths,
            time,
        })
    }

    /// Number of frames
    pub fn n_frames(&self) -> usize {
        self.coords.shape()[0]
    }

    /// Number of atoms, including virtual sites
    pub fn n_atoms(&self) -> usize {
        self.topology.n_atoms()
    }

    /// Number of physical (nonzero-mass) atoms
    pub fn n_physical_atoms(&self) -> usize {
        self.topology
            .atoms()
            .iter()
            .filter(|a| a.element().is_physical())
            .count()
    }

    /// The shared topology
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Coordinates of one frame, shape (n_atoms, 3)
    pub fn frame_coords(&self, frame: usize) -> ArrayView2<'_, f64> {
        self.coords.index_axis(ndarray::Axis(0), frame)
    }

    /// Box edge lengths of one frame
    pub fn frame_box(&self, frame: usize) -> ArrayView1<'_, f64> {
        self.box_lengths.row(frame)
    }

    /// Box volume of one frame (orthorhombic)
    pub fn frame_volume(&self, frame: usize) -> f64 {
        self.box_lengths.row(frame).product()
    }

    /// Per-frame box volumes
    pub fn unitcell_volumes(&self) -> Array1<f64> {
        Array1::from_iter((0..self.n_frames()).map(|f| self.frame_volume(f)))
    }

    /// The smallest box edge length across all frames and dimensions
    ///
    /// Half of this length is the largest radial cutoff for which the
    /// minimum-image convention is valid.
    pub fn min_unitcell_length(&self) -> f64 {
        self.box_lengths.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Frame timestamps in ps
    pub fn time(&self) -> ArrayView1<'_, f64> {
        self.time.view()
    }

    /// The uniform timestep between consecutive frames, in ps
    ///
    /// Spacings are compared after rounding to 1e-3 ps to absorb the write
    /// precision of trajectory files. Fails with
    /// `TrajError::InconsistentTimestep` when more than one distinct
    /// spacing is present.
    pub fn timestep(&self) -> Result<f64> {
        if self.n_frames() < 2 {
            return Err(TrajError::InvalidShape(
                "timestep requires at least two frames".to_string(),
            ));
        }

        let mut spacings: Vec<f64> = self
            .time
            .windows(2)
            .into_iter()
            .map(|w| ((w[1] - w[0]) * 1e3).round() / 1e3)
            .collect();
        spacings.sort_by(|a, b| a.partial_cmp(b).expect("finite timestamps"));
        spacings.dedup();

        match spacings.as_slice() {
            [dt] => Ok(*dt),
            _ => Err(TrajError::InconsistentTimestep(spacings)),
        }
    }

    /// Fraction of atoms matched by a selection
    ///
    /// # Arguments
    ///
    /// * `selection` - The selection to count
    /// * `denominator` - Whether the fraction is against all atoms or
    ///   physical atoms only
    pub fn composition(&self, selection: &Selection, denominator: Denominator) -> f64 {
        let total = match denominator {
            Denominator::AllAtoms => self.n_atoms(),
            Denominator::PhysicalAtoms => self.n_physical_atoms(),
        };
        if total == 0 {
            return 0.0;
        }
        self.topology.select(selection).len() as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array1, Array2, Array3};

    fn two_frame_water() -> Trajectory {
        let o = Element::from_symbol("O").unwrap();
        let h = Element::from_symbol("H").unwrap();
        let top = Topology::new(vec![
            Atom::new("O", o),
            Atom::new("H1", h.clone()),
            Atom::new("H2", h),
        ]);
        let coords = Array3::zeros((2, 3, 3));
        let box_lengths = Array2::from_elem((2, 3), 2.0);
        let time = Array1::from(vec![0.0, 1.0]);
        Trajectory::new(top, coords, box_lengths, time).unwrap()
    }

    #[test]
    fn test_shape_validation() {
        let top = Topology::new(vec![]);
        let coords = Array3::zeros((1, 2, 3));
        let result = Trajectory::new(top, coords, Array2::zeros((1, 3)), Array1::zeros(1));
        assert!(matches!(result, Err(TrajError::InvalidShape(_))));
    }

    #[test]
    fn test_uniform_timestep() {
        let trj = two_frame_water();
        assert_relative_eq!(trj.timestep().unwrap(), 1.0);
    }

    #[test]
    fn test_inconsistent_timestep_is_fatal() {
        let o = Element::from_symbol("O").unwrap();
        let top = Topology::new(vec![
            Atom::new("O", o.clone()),
            Atom::new("O", o.clone()),
            Atom::new("O", o),
        ]);
        let trj = Trajectory::new(
            top,
            Array3::zeros((3, 3, 3)),
            Array2::from_elem((3, 3), 2.0),
            Array1::from(vec![0.0, 1.0, 3.0]),
        )
        .unwrap();
        assert!(matches!(
            trj.timestep(),
            Err(TrajError::InconsistentTimestep(_))
        ));
    }

    #[test]
    fn test_composition_denominators() {
        let o = Element::from_symbol("O").unwrap();
        let h = Element::from_symbol("H").unwrap();
        let top = Topology::new(vec![
            Atom::new("O", o),
            Atom::new("H1", h.clone()),
            Atom::new("H2", h),
            Atom::new("MW", Element::virtual_site()),
        ]);
        let trj = Trajectory::new(
            top,
            Array3::zeros((1, 4, 3)),
            Array2::from_elem((1, 3), 2.0),
            Array1::zeros(1),
        )
        .unwrap();

        assert_relative_eq!(
            trj.composition(&Selection::element("O"), Denominator::AllAtoms),
            0.25
        );
        assert_relative_eq!(
            trj.composition(&Selection::element("O"), Denominator::PhysicalAtoms),
            1.0 / 3.0
        );
    }

    #[test]
    fn test_volumes() {
        let trj = two_frame_water();
        let volumes = trj.unitcell_volumes();
        assert_relative_eq!(volumes[0], 8.0);
        assert_relative_eq!(trj.min_unitcell_length(), 2.0);
    }
}
