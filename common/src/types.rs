use uint::construct_uint;

pub type LottoNumber = u8;
pub type Amount = u64;
pub type Payout = u128;
pub type TicketCount = u64;

construct_uint!{
    /// 256-bit unsigned integer
    pub struct U256(4);
}
