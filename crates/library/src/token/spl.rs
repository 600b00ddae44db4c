use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCodes,
    structs::{MintBurnParams, TokenTransferParams},
};
use anchor_spl::token_interface::{self, Burn, Mint, MintTo, TransferChecked};
use anchor_spl::{
    token::spl_token,
    token_2022::spl_token_2022,
    token_interface::spl_token_2022::extension::{
        BaseStateWithExtensions, ExtensionType, StateWithExtensions,
    },
};

pub fn transfer_spl_tokens(params: TokenTransferParams) -> Result<()> {
    let TokenTransferParams {
        source,
        destination,
        authority,
        amount,
        token_program,
        signer_seeds,
        mint,
    } = params;

    if amount == 0 {
        return Ok(());
    }

    let transfer_accounts = TransferChecked {
        from: source,
        to: destination,
        authority,
        mint: mint.to_account_info(),
    };

    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, transfer_accounts, seeds),
        None => CpiContext::new(token_program, transfer_accounts),
    };

    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
}

pub fn mint_tokens(params: MintBurnParams) -> Result<()> {
    if params.amount == 0 {
        return Ok(());
    }

    let accounts = MintTo {
        mint: params.mint,
        to: params.token_account,
        authority: params.authority,
    };

    let cpi_ctx = match params.signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(params.token_program, accounts, seeds),
        None => CpiContext::new(params.token_program, accounts),
    };

    token_interface::mint_to(cpi_ctx, params.amount)
}

pub fn burn_tokens(params: MintBurnParams) -> Result<()> {
    if params.amount == 0 {
        return Ok(());
    }

    let accounts = Burn {
        mint: params.mint,
        from: params.token_account,
        authority: params.authority,
    };

    let cpi_ctx = match params.signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(params.token_program, accounts, seeds),
        None => CpiContext::new(params.token_program, accounts),
    };

    token_interface::burn(cpi_ctx, params.amount)
}

// Extensions that leave balances untouched between transfer and accounting.
const WHITELISTED_EXTENSIONS: &[ExtensionType] = &[
    ExtensionType::MetadataPointer,
    ExtensionType::TokenMetadata,
    ExtensionType::TransferFeeConfig,
    ExtensionType::TransferHook,
    ExtensionType::MintCloseAuthority,
];

/// Rejects underlying mints whose extensions would break vault accounting
/// (non-zero transfer fees, active transfer hooks, unknown extensions).
pub fn check_underlying_mint(mint: &InterfaceAccount<'_, Mint>) -> Result<()> {
    let mint_info = mint.to_account_info();

    if mint_info.owner == &spl_token::ID {
        return Ok(());
    }

    if spl_token_2022::native_mint::check_id(&mint.key()) {
        return err!(ErrorCodes::LibraryInvalidTokenMint);
    }

    let mint_data = mint_info.data.borrow();
    let state = StateWithExtensions::<spl_token_2022::state::Mint>::unpack(&mint_data)?;

    for extension in state.get_extension_types()? {
        if !WHITELISTED_EXTENSIONS.contains(&extension) {
            return err!(ErrorCodes::LibraryUnsupportedTokenExtension);
        }

        match extension {
            ExtensionType::TransferFeeConfig => {
                let ext = state
                    .get_extension::<spl_token_2022::extension::transfer_fee::TransferFeeConfig>()?;
                if <u16>::from(ext.older_transfer_fee.transfer_fee_basis_points) != 0
                    || <u16>::from(ext.newer_transfer_fee.transfer_fee_basis_points) != 0
                {
                    return err!(ErrorCodes::LibraryUnsupportedTokenExtension);
                }
            }
            ExtensionType::TransferHook => {
                let ext = state
                    .get_extension::<spl_token_2022::extension::transfer_hook::TransferHook>()?;
                let hook_program_id: Option<Pubkey> = ext.program_id.into();
                if hook_program_id.is_some() {
                    return err!(ErrorCodes::LibraryUnsupportedTokenExtension);
                }
            }
            _ => {}
        }
    }

    Ok(())
}
