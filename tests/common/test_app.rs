use bevy::prelude::*;
use procwing::{
    resources::{AeroBackend, DebugLogConfig, ProcWingConfig},
    ProcWingPlugin,
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: ProcWingConfig,
    time_step: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: ProcWingConfig::default(),
            time_step: 1.0 / 50.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ProcWingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_backend(mut self, backend: AeroBackend) -> Self {
        self.config.backend = backend;
        self
    }

    pub fn with_logging(mut self, logging: DebugLogConfig) -> Self {
        self.config.logging = logging;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins).add_plugins(ProcWingPlugin {
            config: self.config,
            timestep: self.time_step,
        });

        // Run an initial update to initialize everything
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs the fixed schedule directly, one simulation tick per call.
    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn spawn(&mut self, bundle: impl Bundle) -> Entity {
        self.app.world_mut().spawn(bundle).id()
    }

    pub fn attach(&mut self, parent: Entity, children: &[Entity]) {
        self.app.world_mut().entity_mut(parent).add_children(children);
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.app.world().get::<T>(entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<Mut<T>> {
        self.app.world_mut().get_mut::<T>(entity)
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    /// Events of type `E` sent since the last frame update.
    pub fn events<E: Event + Clone>(&self) -> Vec<E> {
        self.app
            .world()
            .resource::<Events<E>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    pub fn despawn(&mut self, entity: Entity) {
        self.app.world_mut().entity_mut(entity).despawn_recursive();
    }
}
