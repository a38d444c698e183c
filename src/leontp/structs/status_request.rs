#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct StatusRequest {
    pub version: u8,
    pub mode: u8,
}
