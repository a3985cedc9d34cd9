//! 密码重置邮件模板
//!
//! 固定布局的极简黑白风格（等宽字体），字面量替换渲染。
//! 不使用模板引擎，也不做 HTML 转义：login 与 reset_link 原样插入，
//! 调用方（自家后端）为信任边界

/// 渲染密码重置邮件
///
/// 纯函数：任意输入都被接受，相同输入产出字节相同的 HTML
pub fn password_reset_html(login: &str, reset_link: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="margin: 0; padding: 20px; font-family: monospace; background: #fff; color: #000;">
  <div style="max-width: 600px; margin: 0 auto; border: 2px solid #000;">

    <!-- Header -->
    <div style="background: #000; color: #fff; padding: 20px; text-align: center;">
      <div style="font-size: 24px; font-weight: bold;">
        PASSWORD RESET
      </div>
      <div style="margin-top: 10px; font-size: 14px; letter-spacing: 2px;">
        COSMETICS SHOP
      </div>
    </div>

    <!-- Content -->
    <div style="padding: 30px;">
      <div style="margin-bottom: 20px;">
        <strong>Здравствуйте,</strong>
      </div>

      <div style="margin-bottom: 20px;">
        Получен запрос на сброс пароля для аккаунта: <strong>{login}</strong>
      </div>

      <div style="margin-bottom: 30px;">
        Чтобы установить новый пароль, нажмите на кнопку ниже:
      </div>

      <!-- Button -->
      <div style="text-align: center; margin: 30px 0;">
        <a href="{reset_link}"
           style="display: inline-block;
                  background: #000;
                  color: #fff;
                  padding: 15px 40px;
                  text-decoration: none;
                  border: 2px solid #000;
                  font-weight: bold;
                  letter-spacing: 1px;">
          СБРОСИТЬ ПАРОЛЬ
        </a>
      </div>

      <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #000; font-size: 12px; color: #333;">
        Если вы не запрашивали сброс пароля, просто проигнорируйте это письмо.
      </div>

      <div style="margin-top: 10px; font-size: 12px; color: #333;">
        Или скопируйте ссылку в браузер:<br>
        <span style="word-break: break-all;">{reset_link}</span>
      </div>
    </div>

    <!-- Footer -->
    <div style="background: #f5f5f5; padding: 15px; text-align: center; font-size: 12px; border-top: 1px solid #000;">
      Cosmetics Shop - Your Beauty Destination
    </div>

  </div>
</body>
</html>
"#
    )
}
