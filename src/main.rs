use winit::event_loop::{ControlFlow, EventLoop};

use boxburst::prelude::*;

fn main() {
    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = IntroApp::new(EngineConfig::default());
    event_loop.run_app(&mut app).unwrap();
}
