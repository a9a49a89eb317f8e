//! Device tuning knobs
//!
//! Consumed directly by the command recording and resource layers. Values
//! are carried as configured; range policy belongs to those consumers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TuningOptions {
    /// Map on deferred contexts assuming each command list is submitted once.
    pub dc_single_use_mode: bool,
    /// Zero-initialize workgroup shared memory.
    pub zero_init_workgroup_memory: bool,
    /// Treat all thread-group shared memory accesses as volatile.
    pub force_volatile_tgsm_access: bool,
    pub relaxed_barriers: bool,
    pub ignore_graphics_barriers: bool,
    /// 0 keeps the application's factors.
    pub max_tess_factor: i32,
    /// -1 keeps the application's sampler anisotropy.
    pub sampler_anisotropy: i32,
    pub sampler_lod_bias: f32,
    pub clamp_negative_lod_bias: bool,
    pub invariant_position: bool,
    pub float_controls: bool,
    /// Overrides the application's back buffer count when non-zero.
    pub num_back_buffers: i32,
    /// Caps the application's frame latency when non-zero.
    pub max_frame_latency: i32,
    /// Create the presentation surface on first present.
    pub defer_surface_creation: bool,
    pub force_sample_rate_shading: bool,
    pub disable_msaa: bool,
    /// Bind flags of dynamic resources placed in cached system memory.
    pub cached_dynamic_resources: u32,
    pub enable_context_lock: bool,
    pub expose_driver_command_lists: bool,
    /// Keep emitted commands identical between runs.
    pub reproducible_command_stream: bool,
    pub shader_dump_path: Option<PathBuf>,
}

impl Default for TuningOptions {
    fn default() -> Self {
        Self {
            dc_single_use_mode: false,
            zero_init_workgroup_memory: false,
            force_volatile_tgsm_access: false,
            relaxed_barriers: false,
            ignore_graphics_barriers: false,
            max_tess_factor: 0,
            sampler_anisotropy: -1,
            sampler_lod_bias: 0.0,
            clamp_negative_lod_bias: false,
            invariant_position: true,
            float_controls: true,
            num_back_buffers: 0,
            max_frame_latency: 0,
            defer_surface_creation: false,
            force_sample_rate_shading: false,
            disable_msaa: false,
            cached_dynamic_resources: 0,
            enable_context_lock: false,
            expose_driver_command_lists: true,
            reproducible_command_stream: false,
            shader_dump_path: None,
        }
    }
}
