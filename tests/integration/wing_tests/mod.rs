mod aerodynamics;
mod deflection;
mod geometry;
mod symmetry;
