use crate::infrastructure::drivers::EspLedDriver;

pub(crate) type StageDriver = EspLedDriver<'static>;
