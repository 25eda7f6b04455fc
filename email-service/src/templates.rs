//! HTML bodies for the three transactional emails
//!
//! The dynamic fields are the username, the OTP code, and the dashboard link.
//! Subjects live with the handlers; only the markup is built here.

pub fn verification_email(username: &str, otp: &str) -> String {
    format!(
        r#"
        <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
            <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0;">
                <h1 style="margin: 0;">Welcome to Tabrela!</h1>
            </div>
            <div style="background: #f9fafb; padding: 30px; border-radius: 0 0 10px 10px;">
                <h2 style="color: #333;">Hi {username},</h2>
                <p style="color: #333; line-height: 1.6;">Thank you for registering! Please use the following one-time password (OTP) to verify your email address:</p>

                <div style="background: white; border: 2px dashed #667eea; padding: 20px; text-align: center; border-radius: 10px; margin: 20px 0;">
                    <div style="font-size: 36px; font-weight: bold; letter-spacing: 8px; color: #667eea; font-family: 'Courier New', monospace;">{otp}</div>
                </div>

                <p style="color: #333;"><strong>This code will expire in 10 minutes.</strong></p>
                <p style="color: #333;">If you didn't create an account, you can safely ignore this email.</p>

                <div style="text-align: center; margin-top: 30px; color: #6b7280; font-size: 12px;">
                    <p>&copy; 2025 Tabrela. All rights reserved.</p>
                </div>
            </div>
        </div>
        "#
    )
}

pub fn password_reset_email(username: &str, otp: &str) -> String {
    format!(
        r#"
        <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
            <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0;">
                <h1 style="margin: 0;">🔒 Password Reset Request</h1>
            </div>
            <div style="background: #f9fafb; padding: 30px; border-radius: 0 0 10px 10px;">
                <h2 style="color: #333;">Hi {username},</h2>
                <p style="color: #333; line-height: 1.6;">We received a request to reset your password. Use the OTP below to reset your password:</p>
                <div style="text-align: center; margin: 30px 0;">
                    <div style="display: inline-block; background: white; padding: 20px 40px; border: 2px dashed #667eea; border-radius: 8px; font-size: 32px; font-weight: bold; letter-spacing: 8px; color: #333;">{otp}</div>
                </div>
                <p style="color: #333; line-height: 1.6;">This OTP will expire in <strong>10 minutes</strong> and can only be used once. You have <strong>5 attempts</strong> to enter it correctly.</p>
                <div style="background: #fef2f2; border-left: 4px solid #ef4444; padding: 15px; margin: 20px 0;">
                    <strong style="color: #333;">Security Notice:</strong> <span style="color: #333;">If you didn't request a password reset, please ignore this email or contact support if you're concerned about your account security.</span>
                </div>

                <div style="text-align: center; margin-top: 30px; color: #6b7280; font-size: 12px;">
                    <p>&copy; 2025 Tabrela. All rights reserved.</p>
                </div>
            </div>
        </div>
        "#
    )
}

pub fn welcome_email(username: &str, frontend_url: &str) -> String {
    format!(
        r#"
        <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
            <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0;">
                <h1 style="margin: 0;">🎉 Welcome to Tabrela!</h1>
            </div>
            <div style="background: #f9fafb; padding: 30px; border-radius: 0 0 10px 10px;">
                <h2 style="color: #333;">Hi {username},</h2>
                <p style="color: #333; line-height: 1.6;">Your email has been successfully verified! You now have full access to your Tabrela account.</p>
                <p style="color: #333;">We're excited to have you on board!</p>
                <div style="text-align: center; margin: 20px 0;">
                    <a href="{frontend_url}" style="display: inline-block; background: #667eea; color: white; padding: 15px 30px; text-decoration: none; border-radius: 5px;">Go to Dashboard</a>
                </div>
                <p style="color: #333;">If you have any questions, feel free to reach out to our support team.</p>

                <div style="text-align: center; margin-top: 30px; color: #6b7280; font-size: 12px;">
                    <p>&copy; 2025 Tabrela. All rights reserved.</p>
                </div>
            </div>
        </div>
        "#
    )
}
