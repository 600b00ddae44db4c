use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

pub struct TokenTransferParams<'a, 'info> {
    /// The source account
    pub source: AccountInfo<'info>,
    /// The destination account
    pub destination: AccountInfo<'info>,
    /// The authority/owner of the source account
    pub authority: AccountInfo<'info>,
    /// The amount to transfer
    pub amount: u64,
    /// The token program
    pub token_program: AccountInfo<'info>,
    /// Signer seeds when the authority is a PDA
    pub signer_seeds: Option<&'a [&'a [&'a [u8]]]>,
    /// The mint account
    pub mint: InterfaceAccount<'info, Mint>,
}

pub struct MintBurnParams<'a, 'info> {
    pub mint: AccountInfo<'info>,
    /// Token account receiving (mint) or losing (burn) the tokens
    pub token_account: AccountInfo<'info>,
    /// Mint authority for `mint_to`, token account owner for `burn`
    pub authority: AccountInfo<'info>,
    pub amount: u64,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: Option<&'a [&'a [&'a [u8]]]>,
}
