//! Abstract Factory: one factory per product family of computer parts.
use patterns_core::{Category, Example, Transcript};

pub trait Component {
    fn describe(&self) -> String;
}

pub struct IntelCoreI7;

impl Component for IntelCoreI7 {
    fn describe(&self) -> String {
        "This is an Intel Core i7 CPU.".to_string()
    }
}

pub struct NvidiaGpu;

impl Component for NvidiaGpu {
    fn describe(&self) -> String {
        "This is an Nvidia GPU.".to_string()
    }
}

pub struct IntelCoreI3;

impl Component for IntelCoreI3 {
    fn describe(&self) -> String {
        "This is an Intel Core i3 CPU.".to_string()
    }
}

pub struct IntegratedGpu;

impl Component for IntegratedGpu {
    fn describe(&self) -> String {
        "This is an integrated GPU.".to_string()
    }
}

pub trait ComputerFactory {
    fn create_cpu(&self) -> Box<dyn Component>;
    fn create_gpu(&self) -> Box<dyn Component>;
}

pub struct HighEndComputerFactory;

impl ComputerFactory for HighEndComputerFactory {
    fn create_cpu(&self) -> Box<dyn Component> {
        Box::new(IntelCoreI7)
    }

    fn create_gpu(&self) -> Box<dyn Component> {
        Box::new(NvidiaGpu)
    }
}

pub struct BudgetComputerFactory;

impl ComputerFactory for BudgetComputerFactory {
    fn create_cpu(&self) -> Box<dyn Component> {
        Box::new(IntelCoreI3)
    }

    fn create_gpu(&self) -> Box<dyn Component> {
        Box::new(IntegratedGpu)
    }
}

/// Client code: only sees the factory interface
pub fn assemble(factory: &dyn ComputerFactory, out: &mut Transcript) {
    let cpu = factory.create_cpu();
    let gpu = factory.create_gpu();
    out.line(cpu.describe());
    out.line(gpu.describe());
}

pub struct AbstractFactoryExample;

impl Example for AbstractFactoryExample {
    fn name(&self) -> &str {
        "abstract-factory"
    }

    fn summary(&self) -> &str {
        "matching CPU and GPU families from interchangeable factories"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        assemble(&HighEndComputerFactory, out);
        assemble(&BudgetComputerFactory, out);
        Ok(())
    }
}
